//! muni library - Interactive Brazilian municipality picker
//!
//! This library exposes the core functionality of muni for testing purposes.

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod error;
pub mod geo;
pub mod input;
pub mod layout;
pub mod region;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, Focus, OutputMode};
pub use config::Config;
