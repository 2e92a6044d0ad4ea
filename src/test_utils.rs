//! Shared test utilities for muni
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};

    use crate::app::App;
    use crate::config::Config;
    use crate::geo::{FetchRequest, FetchResponse, Municipality};
    use crate::region::RegionCode;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// A slice of São Paulo's municipalities in upstream order
    pub const SP_NAMES: &[&str] = &[
        "Americana",
        "Campinas",
        "Campo Limpo Paulista",
        "Campos do Jordão",
        "Guarulhos",
        "Santo André",
        "Santos",
        "São Bernardo do Campo",
        "São Paulo",
        "Sorocaba",
    ];

    /// App wired to hand-driven fetch channels
    pub struct WiredApp {
        pub app: App,
        pub requests: Receiver<FetchRequest>,
        pub responses: Sender<FetchResponse>,
    }

    impl WiredApp {
        /// Answer a fetch as the worker would and let the app poll it
        pub fn respond(&mut self, region: &str, names: &[&str]) {
            let region = region_code(region);
            let request_id = self
                .requests
                .try_iter()
                .find(|request| request.region == region)
                .map(|request| request.request_id)
                .unwrap_or_default();
            self.responses
                .send(FetchResponse::Loaded {
                    region,
                    request_id,
                    municipalities: names.iter().map(|name| Municipality::new(*name)).collect(),
                })
                .unwrap();
            self.app.poll_fetch_responses();
        }
    }

    /// Helper to create App with default config for tests
    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    pub fn wired_app() -> WiredApp {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut app = test_app();
        app.loader.set_channels(request_tx, response_rx);
        WiredApp {
            app,
            requests: request_rx,
            responses: response_tx,
        }
    }

    /// App with `region` selected and its list already cached
    pub fn app_with_region(region: &str, names: &[&str]) -> WiredApp {
        let mut wired = wired_app();
        wired.app.select_region(region_code(region));
        wired.respond(region, names);
        wired
    }

    pub fn region_code(code: &str) -> RegionCode {
        RegionCode::parse(code).unwrap()
    }

    /// Type text one key at a time, as the terminal would deliver it
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
