use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertState {
    pub kind: AlertKind,
    pub message: String,
    /// Dismissing this alert re-opens the token prompt instead of
    /// returning to the main screen
    pub reopen_prompt: bool,
}

impl AlertState {
    pub fn success(message: impl Into<String>) -> Self {
        AlertState {
            kind: AlertKind::Success,
            message: message.into(),
            reopen_prompt: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        AlertState {
            kind: AlertKind::Error,
            message: message.into(),
            reopen_prompt: false,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AlertState {
            kind: AlertKind::Error,
            message: message.into(),
            reopen_prompt: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiMode {
    Normal,
    TokenPrompt,
    Alert(AlertState),
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DispatchState {
    Idle,
    Loading { started: Instant },
}

impl DispatchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DispatchState::Loading { .. })
    }
}
