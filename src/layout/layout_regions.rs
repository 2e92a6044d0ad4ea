//! Layout regions tracking for UI components

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    // Base layout
    RegionField,
    MunicipalityInput,
    StatusLine,

    // Popups
    RegionList,
    SuggestionPanel,
}

/// Rendered areas of UI components
///
/// Updated during each render pass. Popups are `None` when not visible.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub region_field: Option<Rect>,
    pub municipality_input: Option<Rect>,
    pub status_line: Option<Rect>,

    pub region_list: Option<Rect>,
    pub suggestion_panel: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
