use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::geo::Municipality;

/// Hard cap on rendered suggestions
pub const MAX_SUGGESTIONS: usize = 10;

/// How typed text is compared against municipality names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Lowercase both sides; accents must match ("sao" misses "São Paulo")
    #[default]
    CaseInsensitive,
    /// Also strip combining marks after NFD decomposition
    AccentInsensitive,
}

impl MatchMode {
    pub fn normalize(self, text: &str) -> String {
        match self {
            MatchMode::CaseInsensitive => text.to_lowercase(),
            MatchMode::AccentInsensitive => text
                .nfd()
                .filter(|c| !is_combining_mark(*c))
                .collect::<String>()
                .to_lowercase(),
        }
    }
}

/// Names containing `text`, in upstream order, at most `limit` of them
///
/// `limit` is itself capped at [`MAX_SUGGESTIONS`]. An empty `text` matches
/// every name.
pub fn filter_municipalities(
    municipalities: &[Municipality],
    text: &str,
    limit: usize,
    mode: MatchMode,
) -> Vec<String> {
    let needle = mode.normalize(text);
    municipalities
        .iter()
        .filter(|m| mode.normalize(&m.name).contains(&needle))
        .take(limit.min(MAX_SUGGESTIONS))
        .map(|m| m.name.clone())
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
