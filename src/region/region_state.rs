use super::{RegionCode, STATES};

/// State picker: the committed region plus the dropdown list used to change it
///
/// Moving the highlight inside the open list never changes the committed
/// region; only [`RegionState::commit`] does, and only when the highlighted
/// state differs from the current one.
#[derive(Debug, Clone, Default)]
pub struct RegionState {
    selected: Option<RegionCode>,
    cursor: usize,
    open: bool,
    list_offset: usize,
}

impl RegionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<RegionCode> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Open the list with the highlight on the committed region
    pub fn open(&mut self) {
        self.open = true;
        self.cursor = self.selected.map(|code| code.index()).unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1).min(STATES.len() - 1);
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self) {
        self.cursor = STATES.len() - 1;
    }

    /// Move the highlight to `index`, clamped to the list
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(STATES.len() - 1);
    }

    /// Move to the next state whose code starts with `letter`, wrapping around
    ///
    /// Repeated presses of the same letter cycle through its matches.
    pub fn jump_to_letter(&mut self, letter: char) {
        let letter = letter.to_ascii_uppercase();
        let len = STATES.len();
        if let Some(offset) = (1..=len).find(|step| {
            let idx = (self.cursor + step) % len;
            STATES[idx].code.starts_with(letter)
        }) {
            self.cursor = (self.cursor + offset) % len;
        }
    }

    /// Commit the highlighted state and close the list
    ///
    /// Returns the new region when the committed value actually changed.
    pub fn commit(&mut self) -> Option<RegionCode> {
        self.open = false;
        let code = RegionCode::from(STATES[self.cursor]);
        self.select(code).then_some(code)
    }

    /// Commit the state at `index` (mouse selection)
    pub fn commit_index(&mut self, index: usize) -> Option<RegionCode> {
        if index >= STATES.len() {
            return None;
        }
        self.cursor = index;
        self.commit()
    }

    /// Set the committed region directly, returning whether it changed
    pub fn select(&mut self, code: RegionCode) -> bool {
        if self.selected == Some(code) {
            return false;
        }
        self.selected = Some(code);
        self.cursor = code.index();
        true
    }

    /// First list row drawn by the last render pass
    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    pub fn set_list_offset(&mut self, offset: usize) {
        self.list_offset = offset;
    }
}

#[cfg(test)]
#[path = "region_state_tests.rs"]
mod region_state_tests;
