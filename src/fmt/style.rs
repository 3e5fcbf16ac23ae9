//! Named styles for the pretty formatter. The formatter only ever asks for a role
//! (soft, emphasized, error); the palette decides what that role looks like.

use super::color::{Color, colorize};

/// The three visual roles a pretty line uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Timestamps, caller locations and tag keys.
    Soft,
    /// The message and ordinary tag values.
    Emphasized,
    /// Error values.
    Error,
}

/// Maps each style to a foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub soft: Color,
    pub emphasized: Color,
    pub error: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            soft: Color::blue(),
            emphasized: Color::white(),
            error: Color::red(),
        }
    }
}

impl Palette {
    #[must_use]
    pub const fn color(&self, style: Style) -> Color {
        match style {
            Style::Soft => self.soft,
            Style::Emphasized => self.emphasized,
            Style::Error => self.error,
        }
    }

    /// Wraps `text` in the escape sequence for `style`, reset included.
    #[must_use]
    pub fn render(&self, text: &str, style: Style) -> String {
        colorize(text, self.color(style))
    }
}
