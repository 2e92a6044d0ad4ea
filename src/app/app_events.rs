use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};
use super::mouse_events;
use crate::input::input_events;
use crate::region::region_events;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Fetch results land before the next key is interpreted
        self.poll_fetch_responses();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Paste always lands in the municipality input
    pub fn handle_paste_event(&mut self, text: String) {
        if self.focus != Focus::MunicipalityInput {
            self.set_focus(Focus::MunicipalityInput);
        }
        self.input.insert_str(&text);
        self.on_municipality_input();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        match self.focus {
            Focus::RegionField => region_events::handle_region_key(self, key),
            Focus::MunicipalityInput => input_events::handle_input_key(self, key),
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
