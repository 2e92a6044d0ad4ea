//! Key handling for the municipality input

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, OutputMode};

pub fn handle_input_key(app: &mut App, key: KeyEvent) {
    if app.autocomplete.is_visible() && handle_panel_key(app, key) {
        return;
    }

    match key.code {
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            app.confirm(OutputMode::NameWithRegion);
        }
        KeyCode::Enter => app.confirm(OutputMode::Name),
        // Also cancels a render still waiting on the region's fetch
        KeyCode::Esc => app.dismiss_suggestions(),
        _ if inserts_line_break(key) => {}
        _ => {
            if app.input.textarea.input(key) {
                app.on_municipality_input();
            }
        }
    }
}

/// Navigation keys consumed by the visible suggestion panel
fn handle_panel_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Down => {
            app.autocomplete.select_next();
            true
        }
        KeyCode::Up => {
            app.autocomplete.select_previous();
            true
        }
        KeyCode::Esc => {
            app.dismiss_suggestions();
            true
        }
        // Enter with nothing active falls through to confirm
        KeyCode::Enter if key.modifiers.is_empty() => app.commit_active(),
        _ => false,
    }
}

/// The textarea would split the line on these
fn inserts_line_break(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('m') if key.modifiers.contains(KeyModifiers::CONTROL))
        || matches!(key.code, KeyCode::Char('\n' | '\r'))
}

#[cfg(test)]
#[path = "input_events_tests.rs"]
mod input_events_tests;
