//! Mouse event dispatcher
//!
//! Routes mouse events to appropriate handlers based on position.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::app_state::App;
use super::mouse_click;
use super::mouse_hover;
use crate::layout::{Region, region_at};

/// Handle mouse events by routing to appropriate handlers
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            mouse_click::handle_click(app, region, mouse);
        }
        MouseEventKind::Moved => {
            mouse_hover::handle_hover(app, region, mouse);
        }
        MouseEventKind::ScrollDown if region == Some(Region::RegionList) => {
            app.region.cursor_down();
        }
        MouseEventKind::ScrollUp if region == Some(Region::RegionList) => {
            app.region.cursor_up();
        }
        _ => {}
    }
}

/// Row index inside a bordered popup, `None` on the border or outside
pub(super) fn inner_row(rect: Rect, mouse: MouseEvent) -> Option<usize> {
    let inner_x = rect.x.saturating_add(1);
    let inner_y = rect.y.saturating_add(1);
    let inner_width = rect.width.saturating_sub(2);
    let inner_height = rect.height.saturating_sub(2);

    if mouse.column < inner_x
        || mouse.column >= inner_x.saturating_add(inner_width)
        || mouse.row < inner_y
        || mouse.row >= inner_y.saturating_add(inner_height)
    {
        return None;
    }

    Some(mouse.row.saturating_sub(inner_y) as usize)
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
