//! Mouse hover handling
//!
//! Hover is visual only: it never changes the committed state or the
//! keyboard-active suggestion.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use super::mouse_events::inner_row;
use crate::layout::Region;

/// Handle mouse hover for the given region
pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::SuggestionPanel) => hover_suggestion_panel(app, mouse),
        Some(Region::RegionList) => {
            app.autocomplete.set_hovered(None);
            hover_region_list(app, mouse);
        }
        _ => app.autocomplete.set_hovered(None),
    }
}

fn hover_suggestion_panel(app: &mut App, mouse: MouseEvent) {
    let row = app
        .layout_regions
        .suggestion_panel
        .and_then(|rect| inner_row(rect, mouse))
        .map(|row| app.autocomplete.list_offset() + row);
    app.autocomplete.set_hovered(row);
}

/// The list highlight follows the pointer
fn hover_region_list(app: &mut App, mouse: MouseEvent) {
    let Some(row) = app
        .layout_regions
        .region_list
        .and_then(|rect| inner_row(rect, mouse))
    else {
        return;
    };

    app.region.set_cursor(app.region.list_offset() + row);
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
