//! Colors used by the widget renderer.

use ratatui::style::Color;

/// Color palette for rendering a select widget.
///
/// Hosts that theme their whole application can build one of these from
/// their own palette; the default matches a dark terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Normal text.
    pub text: Color,
    /// Dimmed text: placeholder, disabled options, the "no results" row.
    pub muted: Color,
    /// Background of the keyboard-focused dropdown row.
    pub focus_bg: Color,
    /// Foreground on the focused row.
    pub focus_fg: Color,
    /// Background of already-selected dropdown rows.
    pub selected_bg: Color,
    /// Tag background in the multi-select trigger.
    pub tag_bg: Color,
    /// Dropdown surface background.
    pub surface: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            focus_bg: Color::Rgb(0xA2, 0x77, 0xFF),
            focus_fg: Color::Black,
            selected_bg: Color::Rgb(0x6E, 0x54, 0x94),
            tag_bg: Color::Rgb(0x3A, 0x3A, 0x4A),
            surface: Color::Rgb(0x20, 0x20, 0x28),
        }
    }
}
