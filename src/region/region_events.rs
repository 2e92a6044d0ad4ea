//! Key handling for the state field and its list

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

pub fn handle_region_key(app: &mut App, key: KeyEvent) {
    if app.region.is_open() {
        handle_open_list_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => app.open_region_list(),
        KeyCode::Char(c) if is_jump_letter(c, key.modifiers) => {
            app.open_region_list();
            app.region.jump_to_letter(c);
        }
        _ => {}
    }
}

fn handle_open_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down => app.region.cursor_down(),
        KeyCode::Up => app.region.cursor_up(),
        KeyCode::Home | KeyCode::PageUp => app.region.cursor_first(),
        KeyCode::End | KeyCode::PageDown => app.region.cursor_last(),
        KeyCode::Enter | KeyCode::Char(' ') => app.commit_region(),
        KeyCode::Esc => app.region.close(),
        KeyCode::Char(c) if is_jump_letter(c, key.modifiers) => app.region.jump_to_letter(c),
        _ => {}
    }
}

fn is_jump_letter(c: char, modifiers: KeyModifiers) -> bool {
    c.is_ascii_alphabetic() && !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
#[path = "region_events_tests.rs"]
mod region_events_tests;
