//! Tests for mouse hover handling

use ratatui::crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::layout::Region;
use crate::test_utils::test_helpers::{SP_NAMES, app_with_region, test_app, type_text};

use super::handle_hover;

fn create_move_event(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_hover_sets_hovered_row_only() {
    let mut wired = app_with_region("SP", SP_NAMES);
    type_text(&mut wired.app, "camp");
    wired.app.layout_regions.suggestion_panel = Some(Rect::new(1, 6, 30, 6));

    handle_hover(
        &mut wired.app,
        Some(Region::SuggestionPanel),
        create_move_event(4, 9),
    );

    assert_eq!(wired.app.autocomplete.hovered_index(), Some(2));
    assert_eq!(wired.app.autocomplete.active_index(), None);
}

#[test]
fn test_hover_scrolled_panel_adds_offset() {
    let mut wired = app_with_region("SP", SP_NAMES);
    type_text(&mut wired.app, "a");
    wired.app.autocomplete.set_list_offset(2);
    wired.app.layout_regions.suggestion_panel = Some(Rect::new(1, 6, 30, 6));

    handle_hover(
        &mut wired.app,
        Some(Region::SuggestionPanel),
        create_move_event(4, 7),
    );

    assert_eq!(wired.app.autocomplete.hovered_index(), Some(2));
}

#[test]
fn test_leaving_panel_clears_hover() {
    let mut wired = app_with_region("SP", SP_NAMES);
    type_text(&mut wired.app, "camp");
    wired.app.layout_regions.suggestion_panel = Some(Rect::new(1, 6, 30, 6));
    handle_hover(
        &mut wired.app,
        Some(Region::SuggestionPanel),
        create_move_event(4, 7),
    );

    handle_hover(&mut wired.app, None, create_move_event(60, 20));

    assert_eq!(wired.app.autocomplete.hovered_index(), None);
}

#[test]
fn test_hover_region_list_moves_highlight() {
    let mut app = test_app();
    app.open_region_list();
    app.region.set_list_offset(5);
    app.layout_regions.region_list = Some(Rect::new(0, 3, 32, 14));

    handle_hover(&mut app, Some(Region::RegionList), create_move_event(3, 6));

    assert_eq!(app.region.cursor(), 7);
    assert_eq!(app.selected_region(), None);
}
