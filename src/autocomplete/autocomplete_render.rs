use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::App;
use crate::theme;
use crate::widgets::popup;

const MIN_POPUP_WIDTH: usize = 24;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: usize = 4;
const POPUP_OFFSET_X: u16 = 1;

/// Draw the suggestion panel directly below the input
///
/// Returns the area used, or `None` when nothing was drawn. A panel cut
/// short by the terminal scrolls to keep the active row in view; the offset
/// is saved so mouse rows map back to suggestions.
pub fn render_popup(app: &mut App, frame: &mut Frame, input_area: Rect) -> Option<Rect> {
    let suggestions = app.autocomplete.suggestions();
    if !app.autocomplete.is_visible() || suggestions.is_empty() {
        return None;
    }

    let text_width = suggestions
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_POPUP_WIDTH);
    let popup_width = (text_width + POPUP_PADDING) as u16;
    let popup_height = suggestions.len() as u16 + POPUP_BORDER_HEIGHT;

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let active = app.autocomplete.active_index();
    let hovered = app.autocomplete.hovered_index();

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let line = if Some(i) == active {
                Line::from(Span::styled(
                    format!("► {}", name),
                    Style::default()
                        .fg(theme::autocomplete::ITEM_ACTIVE_FG)
                        .bg(theme::autocomplete::ITEM_ACTIVE_BG)
                        .add_modifier(Modifier::BOLD),
                ))
            } else if Some(i) == hovered {
                Line::from(Span::styled(
                    format!("  {}", name),
                    Style::default()
                        .fg(theme::autocomplete::ITEM_NORMAL)
                        .bg(theme::autocomplete::ITEM_HOVER_BG),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", name),
                    Style::default().fg(theme::autocomplete::ITEM_NORMAL),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(theme::autocomplete::BORDER))
            .style(Style::default().bg(theme::autocomplete::BACKGROUND)),
    );

    let mut list_state = ListState::default()
        .with_offset(app.autocomplete.list_offset())
        .with_selected(active);
    frame.render_stateful_widget(list, popup_area, &mut list_state);
    app.autocomplete.set_list_offset(list_state.offset());

    Some(popup_area)
}
