use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};
use crate::autocomplete::autocomplete_render;
use crate::region::region_render;
use crate::theme;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (region_area, input_area, status_area) = (layout[0], layout[1], layout[3]);

        region_render::render_field(self, frame, region_area);
        self.layout_regions.region_field = Some(region_area);

        frame.render_widget(&self.input.textarea, input_area);
        self.layout_regions.municipality_input = Some(input_area);

        self.render_status_line(frame, status_area);
        self.layout_regions.status_line = Some(status_area);

        if self.autocomplete.is_visible()
            && let Some(panel_rect) = autocomplete_render::render_popup(self, frame, input_area)
        {
            self.layout_regions.suggestion_panel = Some(panel_rect);
        }

        // Drawn last so it covers the input and the panel
        if self.region.is_open() {
            let list_rect = region_render::render_list(self, frame, region_area);
            self.layout_regions.region_list = Some(list_rect);
        }
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();

        if let Some(warning) = &self.warning {
            spans.push(Span::styled(
                format!(" ⚠ {} ", warning),
                Style::default().fg(theme::status::WARNING),
            ));
        } else if let Some(region) = self.selected_region()
            && self.loader.is_loading(region)
        {
            spans.push(Span::styled(
                format!(" Loading {}… ", region),
                Style::default().fg(theme::status::LOADING),
            ));
        }

        let hints: &[(&str, &str)] = match self.focus {
            Focus::RegionField => &[
                ("Enter", "open/select"),
                ("A-Z", "jump"),
                ("Tab", "municipality"),
                ("Ctrl+C", "quit"),
            ],
            Focus::MunicipalityInput => &[
                ("↑↓", "suggestions"),
                ("Enter", "accept"),
                ("Shift+Enter", "name/UF"),
                ("Tab", "state"),
                ("Ctrl+C", "quit"),
            ],
        };

        for (key, description) in hints {
            spans.push(Span::styled(
                format!(" {}", key),
                Style::default().fg(theme::status::KEY),
            ));
            spans.push(Span::styled(
                format!(" {} ", description),
                Style::default().fg(theme::status::DESCRIPTION),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
