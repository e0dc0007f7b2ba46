//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors, styles and visual constants used by
//! the converter form.
//!
//! # Usage
//! ```rust
//! use grindshift::theme::{Colors, StatusLevel, Styles, Theme};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let warning_style = Theme::status_style(StatusLevel::Warning);
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Primary dark background - used for panels and the help overlay
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Result panel background
    pub const BG_SECONDARY: Color = Color::Rgb(30, 30, 40);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary text color (summaries, hints)
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/placeholder text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - borders, titles
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Focused field border
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Unfocused field border
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Highlighted list row
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Highlighted list row text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/placeholder text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive border style
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Panel background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Result panel background
    pub fn panel_bg_alt() -> Style {
        Style::default().bg(Colors::BG_SECONDARY)
    }

    /// Highlighted list row
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// The grinder currently chosen in a picker
    pub fn chosen() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Converted setting headline
    pub fn result_headline() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    /// Navigation key label
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Level of the status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
}

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Style for the status line
    pub fn status_style(level: StatusLevel) -> Style {
        match level {
            StatusLevel::Info => Style::default().fg(Colors::FG_SECONDARY),
            StatusLevel::Success => Style::default().fg(Colors::SUCCESS),
            StatusLevel::Warning => Style::default().fg(Colors::WARNING),
        }
    }

    /// Border style for a field depending on focus
    pub fn field_border(focused: bool) -> Style {
        if focused {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Title bar height
    pub const TITLE_HEIGHT: u16 = 3;

    /// Clicks input box plus the micron hint line
    pub const INPUT_HEIGHT: u16 = 4;

    /// Result panel height
    pub const RESULT_HEIGHT: u16 = 4;

    /// Status line height
    pub const STATUS_BAR_HEIGHT: u16 = 1;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;
}

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const TITLE: &'static str = "Coffee Grinder Size Converter";
    pub const SOURCE_PLACEHOLDER: &'static str = "Select source grinder";
    pub const TARGET_PLACEHOLDER: &'static str = "Select target grinder";
    pub const CLICKS_PLACEHOLDER: &'static str = "Enter number of clicks";
    pub const WELCOME: &'static str = "Pick a source grinder to begin";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_border_tracks_focus() {
        assert_eq!(Theme::field_border(true), Styles::border_active());
        assert_eq!(Theme::field_border(false), Styles::border_inactive());
    }

    #[test]
    fn test_status_styles_differ() {
        assert_ne!(
            Theme::status_style(StatusLevel::Success),
            Theme::status_style(StatusLevel::Warning)
        );
    }
}
