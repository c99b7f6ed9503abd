use crate::app::AppState;
use crate::constants::MAX_TOKEN_INPUT_LENGTH;
use crate::error::Result;
use crate::types::UiMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<()> {
        // Route input based on UI mode
        match &app.ui_mode {
            UiMode::TokenPrompt => Self::handle_token_prompt(app, key),
            UiMode::Alert(_) => Self::handle_alert(app, key),
            UiMode::Help => Self::handle_help(app, key),
            UiMode::Normal => Self::handle_normal(app, key),
        }
    }

    fn handle_normal(app: &mut AppState, key: KeyEvent) -> Result<()> {
        match key.code {
            // Quit
            KeyCode::Char('q') => {
                app.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
            }

            // The button itself; a no-op while a dispatch is in flight
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.trigger();
            }

            // Forget the stored token; only offered while one exists
            KeyCode::Char('f') if app.has_token => {
                app.forget();
            }

            // Help
            KeyCode::Char('?') | KeyCode::F(1) => {
                app.toggle_help();
            }

            _ => {}
        }
        Ok(())
    }

    fn handle_token_prompt(app: &mut AppState, key: KeyEvent) -> Result<()> {
        match key.code {
            // Quit (must come before the catch-all character arm)
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
            }
            KeyCode::Esc => {
                tracing::debug!("Token entry cancelled by user");
                app.cancel_prompt();
            }
            KeyCode::Enter => {
                app.submit_token();
            }
            KeyCode::Backspace => {
                app.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                if app.input_buffer.len() < MAX_TOKEN_INPUT_LENGTH {
                    app.input_buffer.push(c);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_alert(app: &mut AppState, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Enter => {
                app.dismiss_alert();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_help(app: &mut AppState, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => {
                app.ui_mode = UiMode::Normal;
            }
            _ => {}
        }
        Ok(())
    }
}
