// Configuration type definitions

use serde::Deserialize;

use crate::autocomplete::{MAX_SUGGESTIONS, MatchMode};
use crate::geo::DEFAULT_BASE_URL;
use crate::geo::client::DEFAULT_TIMEOUT_SECS;

/// Geography service section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Suggestion panel section
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default)]
    pub matching: MatchMode,
}

fn default_max_results() -> usize {
    MAX_SUGGESTIONS
}

impl SuggestionsConfig {
    /// Configured cap, forced into `1..=MAX_SUGGESTIONS`
    pub fn effective_max_results(&self) -> usize {
        self.max_results.clamp(1, MAX_SUGGESTIONS)
    }
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            max_results: default_max_results(),
            matching: MatchMode::default(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
