//! Tests for global key handlers

use super::handle_global_keys;
use crate::app::{Focus, OutputMode};
use crate::test_utils::test_helpers::{
    SP_NAMES, app_with_region, key, key_with_mods, test_app, type_text,
};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_ctrl_c_quits_without_output() {
    let mut wired = app_with_region("SP", SP_NAMES);
    type_text(&mut wired.app, "Santos");

    let handled = handle_global_keys(
        &mut wired.app,
        key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );

    assert!(handled);
    assert!(wired.app.should_quit());
    assert_eq!(wired.app.output_mode(), None);
    assert_eq!(wired.app.output_text(), None);
}

#[test]
fn test_plain_c_is_not_global() {
    let mut app = test_app();
    assert!(!handle_global_keys(&mut app, key(KeyCode::Char('c'))));
    assert!(!app.should_quit());
}

#[test]
fn test_tab_switches_focus_both_ways() {
    let mut app = test_app();
    assert_eq!(app.focus, Focus::RegionField);

    assert!(handle_global_keys(&mut app, key(KeyCode::Tab)));
    assert_eq!(app.focus, Focus::MunicipalityInput);

    assert!(handle_global_keys(&mut app, key(KeyCode::Tab)));
    assert_eq!(app.focus, Focus::RegionField);
}

#[test]
fn test_backtab_switches_focus() {
    let mut app = test_app();
    handle_global_keys(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::MunicipalityInput);
}

#[test]
fn test_tab_closes_open_region_list() {
    let mut app = test_app();
    app.open_region_list();
    assert!(app.region.is_open());

    handle_global_keys(&mut app, key(KeyCode::Tab));

    assert!(!app.region.is_open());
    assert_eq!(app.focus, Focus::MunicipalityInput);
}

#[test]
fn test_ctrl_c_overrides_earlier_confirm_mode() {
    let mut app = test_app();
    app.output_mode = Some(OutputMode::Name);
    handle_global_keys(
        &mut app,
        key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert_eq!(app.output_mode(), None);
}
