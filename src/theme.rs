//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Municipality input field
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Rgb(0, 217, 255); // Electric cyan
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(90, 92, 119);
    pub const TEXT: Color = palette::TEXT;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;
    pub const CURSOR: Style = palette::CURSOR;
}

/// State picker field and its dropdown list
pub mod region {
    use super::*;

    pub const BORDER_FOCUSED: Color = Color::Rgb(189, 147, 249); // Soft purple
    pub const BORDER_UNFOCUSED: Color = Color::Rgb(90, 92, 119);
    pub const CODE: Color = palette::YELLOW;
    pub const NAME: Color = palette::TEXT;
    pub const PLACEHOLDER: Color = palette::TEXT_DIM;

    pub const LIST_BORDER: Color = palette::PURPLE;
    pub const LIST_BG: Color = palette::BG_SURFACE;
    pub const LIST_SELECTED_FG: Color = palette::BG_DARK;
    pub const LIST_SELECTED_BG: Color = palette::PURPLE;
}

/// Suggestion panel below the input
pub mod autocomplete {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const ITEM_NORMAL: Color = palette::TEXT;
    pub const ITEM_HOVER_BG: Color = palette::BG_HOVER;
    pub const ITEM_ACTIVE_FG: Color = palette::BG_DARK;
    pub const ITEM_ACTIVE_BG: Color = palette::CYAN;
}

/// Status line at the bottom of the screen
pub mod status {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const LOADING: Color = palette::YELLOW;
    pub const WARNING: Color = palette::YELLOW;
}
