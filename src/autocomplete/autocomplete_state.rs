/// Suggestion panel state
///
/// The active index is the keyboard highlight, the hovered index follows the
/// mouse. Both reset whenever the list is recomputed or hidden. Navigation
/// clamps at both ends; it never wraps.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteState {
    suggestions: Vec<String>,
    active: Option<usize>,
    hovered: Option<usize>,
    is_visible: bool,
    /// First row drawn when the panel is shorter than the list
    list_offset: usize,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list; an empty list hides the panel
    pub fn update_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
        self.active = None;
        self.hovered = None;
        self.list_offset = 0;
        self.is_visible = !self.suggestions.is_empty();
    }

    pub fn hide(&mut self) {
        self.is_visible = false;
        self.suggestions.clear();
        self.active = None;
        self.hovered = None;
        self.list_offset = 0;
    }

    /// ArrowDown: start at the first row, then advance up to the last
    pub fn select_next(&mut self) {
        if !self.is_visible || self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.active = Some(match self.active {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    /// ArrowUp: retreat down to the first row; nothing happens without an active row
    pub fn select_previous(&mut self) {
        if !self.is_visible {
            return;
        }
        if let Some(i) = self.active {
            self.active = Some(i.saturating_sub(1));
        }
    }

    pub fn active(&self) -> Option<&str> {
        if !self.is_visible {
            return None;
        }
        self.active
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|i| *i < self.suggestions.len());
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    pub fn suggestion_at(&self, index: usize) -> Option<&str> {
        if !self.is_visible {
            return None;
        }
        self.suggestions.get(index).map(String::as_str)
    }

    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    pub fn set_list_offset(&mut self, offset: usize) {
        self.list_offset = offset;
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
