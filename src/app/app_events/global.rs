use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;

/// Keys that act the same whichever field has focus
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.output_mode = None;
            app.should_quit = true;
            true
        }

        KeyCode::Tab if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_focus();
            true
        }

        KeyCode::BackTab => {
            app.toggle_focus();
            true
        }

        _ => false,
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
