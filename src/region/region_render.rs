use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::STATES;
use crate::app::{App, Focus};
use crate::theme;
use crate::widgets::popup;

const MAX_VISIBLE_STATES: u16 = 12;
const LIST_BORDER_HEIGHT: u16 = 2;
const LIST_WIDTH: u16 = 32;

/// Render the state field showing the committed region
pub fn render_field(app: &App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::RegionField {
        theme::region::BORDER_FOCUSED
    } else {
        theme::region::BORDER_UNFOCUSED
    };

    let arrow = if app.region.is_open() { "▲" } else { "▼" };
    let line = match app.region.selected() {
        Some(code) => Line::from(vec![
            Span::styled(
                code.as_str(),
                Style::default()
                    .fg(theme::region::CODE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(code.state().name, Style::default().fg(theme::region::NAME)),
        ]),
        None => Line::from(Span::styled(
            "Select a state",
            Style::default().fg(theme::region::PLACEHOLDER),
        )),
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" State {} ", arrow))
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(paragraph, area);
}

/// Render the open state list below the field and return where it was drawn
pub fn render_list(app: &mut App, frame: &mut Frame, field_area: Rect) -> Rect {
    let visible = (STATES.len() as u16).min(MAX_VISIBLE_STATES);
    let list_area = popup::popup_below_anchor(
        field_area,
        frame.area(),
        LIST_WIDTH,
        visible + LIST_BORDER_HEIGHT,
        0,
    );

    let items: Vec<ListItem> = STATES
        .iter()
        .map(|state| ListItem::new(format!(" {}  {}", state.code, state.name)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" States ")
                .border_style(Style::default().fg(theme::region::LIST_BORDER))
                .style(Style::default().bg(theme::region::LIST_BG)),
        )
        .highlight_style(
            Style::default()
                .fg(theme::region::LIST_SELECTED_FG)
                .bg(theme::region::LIST_SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default()
        .with_offset(app.region.list_offset())
        .with_selected(Some(app.region.cursor()));

    popup::clear_area(frame, list_area);
    frame.render_stateful_widget(list, list_area, &mut list_state);
    app.region.set_list_offset(list_state.offset());

    list_area
}
