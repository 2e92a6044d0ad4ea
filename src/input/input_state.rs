use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::theme;

/// Single-line municipality text field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Municipality ")
                .border_style(Style::default().fg(theme::input::BORDER_UNFOCUSED)),
        );
        textarea.set_style(Style::default().fg(theme::input::TEXT));
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::input::CURSOR);
        textarea.set_placeholder_text("Type a municipality name");
        textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));

        Self { textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Replace the whole line, cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        // Pasted or committed text must stay on one line
        let single_line = text.replace(['\r', '\n'], " ");
        self.textarea.insert_str(&single_line);
    }

    pub fn clear(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
    }

    /// Insert at the cursor, flattening line breaks
    pub fn insert_str(&mut self, text: &str) {
        let single_line = text.replace(['\r', '\n'], " ");
        self.textarea.insert_str(&single_line);
    }

    /// Restyle the border for the focus state
    pub fn set_focused(&mut self, focused: bool) {
        let color = if focused {
            theme::input::BORDER_FOCUSED
        } else {
            theme::input::BORDER_UNFOCUSED
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Municipality ")
                .border_style(Style::default().fg(color)),
        );
        let cursor = if focused {
            theme::input::CURSOR
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
