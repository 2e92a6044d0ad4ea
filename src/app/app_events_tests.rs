//! Tests for app_events

use crate::app::Focus;
use crate::test_utils::test_helpers::{
    SP_NAMES, app_with_region, key, key_with_mods, region_code, test_app,
};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_paste_event_inserts_text() {
    let mut wired = app_with_region("SP", SP_NAMES);

    wired.app.handle_paste_event("Campinas".to_string());

    assert_eq!(wired.app.municipality(), "Campinas");
    assert_eq!(wired.app.autocomplete.suggestions(), &["Campinas"]);
}

#[test]
fn test_paste_event_appends_to_existing_text() {
    let mut wired = app_with_region("SP", SP_NAMES);
    wired.app.handle_key_event(key(KeyCode::Char('S')));

    wired.app.handle_paste_event("orocaba".to_string());

    assert_eq!(wired.app.municipality(), "Sorocaba");
}

#[test]
fn test_paste_flattens_line_breaks() {
    let mut wired = app_with_region("SP", SP_NAMES);

    wired.app.handle_paste_event("São\nPaulo".to_string());

    assert_eq!(wired.app.municipality(), "São Paulo");
    assert_eq!(wired.app.autocomplete.suggestions(), &["São Paulo"]);
}

#[test]
fn test_paste_while_region_focused_moves_focus() {
    let mut wired = app_with_region("SP", SP_NAMES);
    wired.app.set_focus(Focus::RegionField);

    wired.app.handle_paste_event("Santos".to_string());

    assert_eq!(wired.app.focus, Focus::MunicipalityInput);
    assert_eq!(wired.app.municipality(), "Santos");
}

#[test]
fn test_keys_route_by_focus() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.region.is_open());

    app.handle_key_event(key(KeyCode::Esc));
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('x')));

    assert_eq!(app.municipality(), "x");
    assert!(!app.region.is_open());
}

#[test]
fn test_full_keyboard_flow() {
    let mut wired = crate::test_utils::test_helpers::wired_app();
    let app = &mut wired.app;

    // S cycles SC, SE, SP
    for _ in 0..3 {
        app.handle_key_event(key(KeyCode::Char('s')));
    }
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.selected_region(), Some(region_code("SP")));

    wired.respond("SP", SP_NAMES);
    let app = &mut wired.app;
    for c in "paulo".chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.municipality(), "Campo Limpo Paulista");

    app.handle_key_event(key_with_mods(KeyCode::Enter, KeyModifiers::SHIFT));
    assert!(app.should_quit());
    assert_eq!(app.output_text().as_deref(), Some("Campo Limpo Paulista/SP"));
}
