use crate::constants::TOKEN_KEY;
use crate::github::DispatchError;
use crate::store::TokenStore;
use crate::types::{AlertState, DispatchState, UiMode};
use std::time::Instant;

pub struct AppState {
    pub store: Box<dyn TokenStore>,
    pub has_token: bool,
    pub should_quit: bool,

    // UI Mode
    pub ui_mode: UiMode,
    pub input_buffer: String,

    // Dispatch
    pub dispatch_state: DispatchState,
    pending_dispatch: Option<String>,
}

impl AppState {
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        let mut ui_mode = UiMode::Normal;
        let has_token = match store.get(TOKEN_KEY) {
            Ok(value) => value.is_some(),
            Err(e) => {
                tracing::error!("Token store read failed: {}", e);
                ui_mode = UiMode::Alert(AlertState::error(format!("Storage error: {}", e)));
                false
            }
        };

        AppState {
            store,
            has_token,
            should_quit: false,
            ui_mode,
            input_buffer: String::new(),
            dispatch_state: DispatchState::Idle,
            pending_dispatch: None,
        }
    }

    /// The action behind the main button.
    ///
    /// With a stored token the dispatch starts right away; without one
    /// the token prompt opens instead. Ignored while a dispatch is in
    /// flight.
    pub fn trigger(&mut self) {
        if self.dispatch_state.is_loading() {
            return;
        }

        match self.store.get(TOKEN_KEY) {
            Ok(Some(token)) => self.begin_dispatch(token),
            Ok(None) => {
                self.input_buffer.clear();
                self.ui_mode = UiMode::TokenPrompt;
            }
            Err(e) => {
                tracing::error!("Token store read failed: {}", e);
                self.ui_mode = UiMode::Alert(AlertState::error(format!("Storage error: {}", e)));
            }
        }
    }

    /// Submit the token prompt's current input.
    ///
    /// A whitespace-only value is rejected with a validation alert that
    /// re-opens the prompt; the buffer is kept so the user can fix it.
    /// A valid value is stored and dispatched immediately.
    pub fn submit_token(&mut self) {
        let trimmed = self.input_buffer.trim().to_string();

        if trimmed.is_empty() {
            tracing::warn!("Token submission rejected: empty input");
            self.ui_mode = UiMode::Alert(AlertState::validation("Please enter a valid token."));
            return;
        }

        if let Err(e) = self.store.set(TOKEN_KEY, &trimmed) {
            tracing::error!("Token store write failed: {}", e);
            self.ui_mode = UiMode::Alert(AlertState::error(format!("Storage error: {}", e)));
            return;
        }

        tracing::info!("Token saved");
        self.has_token = true;
        self.input_buffer.clear();
        self.ui_mode = UiMode::Normal;
        self.begin_dispatch(trimmed);
    }

    /// Close the token prompt without saving anything
    pub fn cancel_prompt(&mut self) {
        self.input_buffer.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Delete the stored token. Stays available while a dispatch is in
    /// flight; loading only disables the trigger.
    pub fn forget(&mut self) {
        if let Err(e) = self.store.remove(TOKEN_KEY) {
            tracing::error!("Token store remove failed: {}", e);
            self.ui_mode = UiMode::Alert(AlertState::error(format!("Storage error: {}", e)));
            return;
        }

        tracing::info!("Token forgotten");
        self.has_token = false;
    }

    /// Close the active alert, returning to the token prompt when the
    /// alert came from validation
    pub fn dismiss_alert(&mut self) {
        if let UiMode::Alert(alert) = &self.ui_mode {
            let reopen = alert.reopen_prompt;
            self.ui_mode = if reopen {
                UiMode::TokenPrompt
            } else {
                UiMode::Normal
            };
        }
    }

    pub fn toggle_help(&mut self) {
        if self.ui_mode == UiMode::Help {
            self.ui_mode = UiMode::Normal;
        } else {
            self.ui_mode = UiMode::Help;
        }
    }

    /// Record the outcome of the dispatch call. Loading clears on every
    /// path; the outcome is reported as a blocking alert.
    pub fn finish_dispatch(&mut self, result: Result<(), DispatchError>) {
        self.dispatch_state = DispatchState::Idle;

        match result {
            Ok(()) => {
                tracing::info!("Dispatch succeeded");
                self.ui_mode =
                    UiMode::Alert(AlertState::success("GitHub Action triggered successfully!"));
            }
            Err(e) => {
                tracing::warn!("Dispatch failed: {}", e);
                self.ui_mode = UiMode::Alert(AlertState::error(e.to_string()));
            }
        }
    }

    /// Hand the queued dispatch token to the event loop, at most once
    pub fn take_pending_dispatch(&mut self) -> Option<String> {
        self.pending_dispatch.take()
    }

    fn begin_dispatch(&mut self, token: String) {
        self.dispatch_state = DispatchState::Loading {
            started: Instant::now(),
        };
        self.pending_dispatch = Some(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTokenStore;

    fn app_without_token() -> AppState {
        AppState::new(Box::new(MemoryTokenStore::new()))
    }

    fn app_with_token(token: &str) -> AppState {
        let mut store = MemoryTokenStore::new();
        store.set(TOKEN_KEY, token).unwrap();
        AppState::new(Box::new(store))
    }

    // Store double whose every operation fails
    struct FailingStore;

    impl TokenStore for FailingStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Err(anyhow::anyhow!("permission denied"))
        }

        fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("permission denied"))
        }

        fn remove(&mut self, _key: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("permission denied"))
        }
    }

    #[test]
    fn test_initialize_detects_stored_token() {
        let app = app_with_token("ghp_stored");
        assert!(app.has_token);

        let app = app_without_token();
        assert!(!app.has_token);
    }

    #[test]
    fn test_trigger_without_token_opens_prompt() {
        let mut app = app_without_token();

        app.trigger();

        assert_eq!(app.ui_mode, UiMode::TokenPrompt);
        assert!(!app.dispatch_state.is_loading());
        assert_eq!(app.take_pending_dispatch(), None);
    }

    #[test]
    fn test_trigger_with_token_dispatches_directly() {
        let mut app = app_with_token("ghp_stored");

        app.trigger();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.dispatch_state.is_loading());
        assert_eq!(app.take_pending_dispatch(), Some("ghp_stored".to_string()));
    }

    #[test]
    fn test_submit_valid_token_stores_and_dispatches_once() {
        let mut app = app_without_token();
        app.trigger();
        app.input_buffer = "  ghp_fresh  ".to_string();

        app.submit_token();

        assert_eq!(
            app.store.get(TOKEN_KEY).unwrap(),
            Some("ghp_fresh".to_string())
        );
        assert!(app.has_token);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.dispatch_state.is_loading());
        assert_eq!(app.take_pending_dispatch(), Some("ghp_fresh".to_string()));
        assert_eq!(app.take_pending_dispatch(), None);
    }

    #[test]
    fn test_submit_whitespace_token_rejected() {
        let mut app = app_without_token();
        app.trigger();
        app.input_buffer = "   \t ".to_string();

        app.submit_token();

        assert_eq!(app.store.get(TOKEN_KEY).unwrap(), None);
        assert!(!app.has_token);
        assert!(!app.dispatch_state.is_loading());
        assert_eq!(app.take_pending_dispatch(), None);
        match &app.ui_mode {
            UiMode::Alert(alert) => {
                assert_eq!(alert.message, "Please enter a valid token.");
                assert!(alert.reopen_prompt);
            }
            other => panic!("expected validation alert, got {:?}", other),
        }

        // Dismissing the alert lands back in the prompt with the input intact
        app.dismiss_alert();
        assert_eq!(app.ui_mode, UiMode::TokenPrompt);
        assert_eq!(app.input_buffer, "   \t ");
    }

    #[test]
    fn test_cancel_prompt_discards_input() {
        let mut app = app_without_token();
        app.trigger();
        app.input_buffer = "half-typed".to_string();

        app.cancel_prompt();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.store.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_forget_removes_token_and_reprompts() {
        let mut app = app_with_token("ghp_stored");

        app.forget();

        assert!(!app.has_token);
        assert_eq!(app.store.get(TOKEN_KEY).unwrap(), None);

        // The next trigger has to ask for a token again
        app.trigger();
        assert_eq!(app.ui_mode, UiMode::TokenPrompt);
        assert_eq!(app.take_pending_dispatch(), None);
    }

    #[test]
    fn test_trigger_ignored_while_loading() {
        let mut app = app_with_token("ghp_stored");
        app.trigger();
        assert_eq!(app.take_pending_dispatch(), Some("ghp_stored".to_string()));

        app.trigger();

        assert!(app.dispatch_state.is_loading());
        assert_eq!(app.take_pending_dispatch(), None);
    }

    #[test]
    fn test_forget_stays_available_while_loading() {
        let mut app = app_with_token("ghp_stored");
        app.trigger();

        app.forget();

        assert!(!app.has_token);
        assert_eq!(app.store.get(TOKEN_KEY).unwrap(), None);
        // The in-flight dispatch keeps running
        assert!(app.dispatch_state.is_loading());
    }

    #[test]
    fn test_success_clears_loading_and_alerts() {
        let mut app = app_with_token("ghp_stored");
        app.trigger();

        app.finish_dispatch(Ok(()));

        assert!(!app.dispatch_state.is_loading());
        assert_eq!(
            app.ui_mode,
            UiMode::Alert(AlertState::success("GitHub Action triggered successfully!"))
        );
    }

    #[test]
    fn test_api_error_clears_loading_and_alerts() {
        let mut app = app_with_token("ghp_stored");
        app.trigger();

        app.finish_dispatch(Err(DispatchError::Api {
            status: 401,
            message: Some("Bad credentials".to_string()),
        }));

        assert!(!app.dispatch_state.is_loading());
        match &app.ui_mode {
            UiMode::Alert(alert) => {
                assert!(alert.message.contains("Bad credentials"));
                assert!(!alert.reopen_prompt);
            }
            other => panic!("expected error alert, got {:?}", other),
        }
    }

    #[test]
    fn test_network_error_clears_loading_and_alerts() {
        let mut app = app_with_token("ghp_stored");
        app.trigger();

        app.finish_dispatch(Err(DispatchError::Network(
            "connection refused".to_string(),
        )));

        assert!(!app.dispatch_state.is_loading());
        assert_eq!(
            app.ui_mode,
            UiMode::Alert(AlertState::error("Network error: connection refused"))
        );
    }

    #[test]
    fn test_dismiss_result_alert_returns_to_normal() {
        let mut app = app_with_token("ghp_stored");
        app.trigger();
        app.finish_dispatch(Ok(()));

        app.dismiss_alert();

        assert_eq!(app.ui_mode, UiMode::Normal);
        // The app stays interactive after a completed call
        app.trigger();
        assert!(app.dispatch_state.is_loading());
    }

    #[test]
    fn test_toggle_help() {
        let mut app = app_without_token();

        app.toggle_help();
        assert_eq!(app.ui_mode, UiMode::Help);

        app.toggle_help();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_storage_failure_on_startup_shows_alert() {
        let mut app = AppState::new(Box::new(FailingStore));

        assert!(!app.has_token);
        assert_eq!(
            app.ui_mode,
            UiMode::Alert(AlertState::error("Storage error: permission denied"))
        );

        // The app stays usable once the alert is dismissed
        app.dismiss_alert();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_storage_failure_on_trigger_dispatches_nothing() {
        let mut app = AppState::new(Box::new(FailingStore));
        app.dismiss_alert();

        app.trigger();

        assert!(!app.dispatch_state.is_loading());
        assert_eq!(app.take_pending_dispatch(), None);
        assert_eq!(
            app.ui_mode,
            UiMode::Alert(AlertState::error("Storage error: permission denied"))
        );
    }

    #[test]
    fn test_storage_failure_on_submit_stores_nothing() {
        let mut app = AppState::new(Box::new(FailingStore));
        app.dismiss_alert();
        app.ui_mode = UiMode::TokenPrompt;
        app.input_buffer = "ghp_doomed".to_string();

        app.submit_token();

        assert!(!app.has_token);
        assert!(!app.dispatch_state.is_loading());
        assert_eq!(app.take_pending_dispatch(), None);
        match &app.ui_mode {
            UiMode::Alert(alert) => {
                assert!(alert.message.starts_with("Storage error"));
                assert!(!alert.reopen_prompt);
            }
            other => panic!("expected storage error alert, got {:?}", other),
        }
    }

    #[test]
    fn test_storage_failure_on_forget_keeps_affordance() {
        let mut app = AppState::new(Box::new(FailingStore));
        app.dismiss_alert();
        app.has_token = true;

        app.forget();

        // The removal did not happen, so the forget line stays offered
        assert!(app.has_token);
        match &app.ui_mode {
            UiMode::Alert(alert) => {
                assert!(alert.message.starts_with("Storage error"));
            }
            other => panic!("expected storage error alert, got {:?}", other),
        }
    }
}
