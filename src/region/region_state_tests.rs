//! Tests for region_state

use super::*;
use proptest::prelude::*;

fn code(s: &str) -> RegionCode {
    RegionCode::parse(s).unwrap()
}

#[test]
fn test_new_has_no_selection() {
    let state = RegionState::new();
    assert_eq!(state.selected(), None);
    assert!(!state.is_open());
}

#[test]
fn test_open_places_cursor_on_selection() {
    let mut state = RegionState::new();
    state.select(code("MG"));
    state.cursor_first();
    state.open();
    assert!(state.is_open());
    assert_eq!(STATES[state.cursor()].code, "MG");
}

#[test]
fn test_open_without_selection_starts_at_top() {
    let mut state = RegionState::new();
    state.open();
    assert_eq!(state.cursor(), 0);
}

#[test]
fn test_cursor_clamps_at_both_ends() {
    let mut state = RegionState::new();
    state.open();
    state.cursor_up();
    assert_eq!(state.cursor(), 0);

    state.cursor_last();
    state.cursor_down();
    assert_eq!(state.cursor(), STATES.len() - 1);
}

#[test]
fn test_set_cursor_clamps_past_end() {
    let mut state = RegionState::new();
    state.set_cursor(4);
    assert_eq!(state.cursor(), 4);
    state.set_cursor(200);
    assert_eq!(state.cursor(), STATES.len() - 1);
}

#[test]
fn test_commit_changed_region() {
    let mut state = RegionState::new();
    state.open();
    state.cursor_down();
    let changed = state.commit();
    assert_eq!(changed, Some(code("AL")));
    assert_eq!(state.selected(), Some(code("AL")));
    assert!(!state.is_open());
}

#[test]
fn test_commit_same_region_is_not_a_change() {
    let mut state = RegionState::new();
    state.select(code("SP"));
    state.open();
    assert_eq!(state.commit(), None);
    assert_eq!(state.selected(), Some(code("SP")));
    assert!(!state.is_open());
}

#[test]
fn test_moving_cursor_does_not_change_selection() {
    let mut state = RegionState::new();
    state.select(code("BA"));
    state.open();
    state.cursor_down();
    state.cursor_down();
    assert_eq!(state.selected(), Some(code("BA")));
}

#[test]
fn test_close_discards_highlight() {
    let mut state = RegionState::new();
    state.select(code("BA"));
    state.open();
    state.cursor_down();
    state.close();
    assert_eq!(state.selected(), Some(code("BA")));
    state.open();
    assert_eq!(STATES[state.cursor()].code, "BA");
}

#[test]
fn test_jump_to_letter_cycles_matches() {
    let mut state = RegionState::new();
    state.open();

    state.jump_to_letter('r');
    assert_eq!(STATES[state.cursor()].code, "RJ");
    state.jump_to_letter('R');
    assert_eq!(STATES[state.cursor()].code, "RN");
    state.jump_to_letter('r');
    assert_eq!(STATES[state.cursor()].code, "RO");
    state.jump_to_letter('r');
    assert_eq!(STATES[state.cursor()].code, "RR");
    state.jump_to_letter('r');
    assert_eq!(STATES[state.cursor()].code, "RS");
    state.jump_to_letter('r');
    assert_eq!(STATES[state.cursor()].code, "RJ");
}

#[test]
fn test_jump_to_letter_without_match_keeps_cursor() {
    let mut state = RegionState::new();
    state.open();
    state.cursor_down();
    state.jump_to_letter('z');
    assert_eq!(state.cursor(), 1);
}

#[test]
fn test_commit_index_out_of_range() {
    let mut state = RegionState::new();
    assert_eq!(state.commit_index(99), None);
    assert_eq!(state.selected(), None);
}

#[test]
fn test_commit_index_selects_row() {
    let mut state = RegionState::new();
    state.open();
    assert_eq!(state.commit_index(25), Some(code("SP")));
    assert!(!state.is_open());
}

#[test]
fn test_toggle() {
    let mut state = RegionState::new();
    state.toggle();
    assert!(state.is_open());
    state.toggle();
    assert!(!state.is_open());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // The cursor never leaves the state table whatever the key sequence
    #[test]
    fn prop_cursor_stays_in_bounds(moves in prop::collection::vec(0u8..4, 0..80)) {
        let mut state = RegionState::new();
        state.open();
        for m in moves {
            match m {
                0 => state.cursor_down(),
                1 => state.cursor_up(),
                2 => state.jump_to_letter('m'),
                _ => state.cursor_last(),
            }
            prop_assert!(state.cursor() < STATES.len());
        }
    }
}
