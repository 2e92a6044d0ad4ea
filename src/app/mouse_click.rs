//! Mouse click handling
//!
//! Focus changes, state list selection and suggestion commits.

use ratatui::crossterm::event::MouseEvent;
use tui_textarea::CursorMove;

use super::app_state::{App, Focus};
use super::mouse_events::inner_row;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    // Clicking anywhere but the input or the panel dismisses the panel
    if !matches!(
        region,
        Some(Region::MunicipalityInput) | Some(Region::SuggestionPanel)
    ) {
        app.autocomplete.hide();
    }

    // Same for the state list, except the field itself toggles it below
    if app.region.is_open() && !matches!(region, Some(Region::RegionList | Region::RegionField)) {
        app.region.close();
    }

    match region {
        Some(Region::RegionField) => click_region_field(app),
        Some(Region::RegionList) => click_region_list(app, mouse),
        Some(Region::MunicipalityInput) => click_input_field(app, mouse),
        Some(Region::SuggestionPanel) => click_suggestion_panel(app, mouse),
        _ => {}
    }
}

fn click_region_field(app: &mut App) {
    app.set_focus(Focus::RegionField);
    app.toggle_region_list();
}

fn click_region_list(app: &mut App, mouse: MouseEvent) {
    let Some(list_rect) = app.layout_regions.region_list else {
        return;
    };
    let Some(row) = inner_row(list_rect, mouse) else {
        return;
    };

    app.commit_region_index(app.region.list_offset() + row);
}

fn click_input_field(app: &mut App, mouse: MouseEvent) {
    // If unfocused, just focus and return (don't move cursor)
    if app.focus != Focus::MunicipalityInput {
        app.set_focus(Focus::MunicipalityInput);
        return;
    }

    let Some(input_rect) = app.layout_regions.municipality_input else {
        return;
    };

    let inner_x = input_rect.x.saturating_add(1);
    let inner_width = input_rect.width.saturating_sub(2);
    if mouse.column < inner_x || mouse.column >= inner_x.saturating_add(inner_width) {
        return;
    }

    // Jump clamps to the end of the line
    let column = mouse.column - inner_x;
    app.input.textarea.move_cursor(CursorMove::Jump(0, column));
}

fn click_suggestion_panel(app: &mut App, mouse: MouseEvent) {
    let Some(panel_rect) = app.layout_regions.suggestion_panel else {
        return;
    };
    let Some(row) = inner_row(panel_rect, mouse) else {
        return;
    };

    let index = app.autocomplete.list_offset() + row;
    if app.commit_suggestion(index) && app.focus != Focus::MunicipalityInput {
        app.set_focus(Focus::MunicipalityInput);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
