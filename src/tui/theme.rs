//! Theme system for TUI colors and styles
//!
//! Defines color constants consistent with the CLI output (commands/show.rs).

use iocraft::prelude::Color;

use crate::types::TypeColor;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub id_color: Color,

    // Semantic colors
    pub favorite: Color,
    pub error: Color,
    pub loading: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            highlight_text: Color::White,
            id_color: Color::Cyan,

            favorite: Color::Yellow,
            error: Color::Red,
            loading: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the terminal color for an entry type's color category,
    /// consistent with the colored CLI output.
    pub fn type_color(&self, color: TypeColor) -> Color {
        match color {
            TypeColor::Red => Color::Red,
            TypeColor::Blue => Color::Blue,
            TypeColor::Green => Color::Green,
            TypeColor::Yellow => Color::Yellow,
            TypeColor::Purple => Color::Magenta,
            TypeColor::Brown => Color::DarkRed,
            TypeColor::Pink => Color::Magenta,
            TypeColor::Cyan => Color::Cyan,
            TypeColor::Gray => Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            TypeColor::Neutral => self.text,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
