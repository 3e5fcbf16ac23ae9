//! Turning a finished record into one output line. The two formatters are pure
//! functions over an [`Entry`]; the timestamp is rendered before they run.

mod color;
pub mod json;
pub mod pretty;
mod style;
mod timestamp;

pub use color::{Color, ColorMode, colorize};
pub use style::{Palette, Style};
pub use timestamp::DateFormat;

use crate::record::Tag;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Key of the leading timestamp field.
pub const TIME_KEY: &str = "time";
/// Key of the message field.
pub const MESSAGE_KEY: &str = "message";
/// Key of the debug-only source location field.
pub const CALLER_KEY: &str = "caller";

/// The two mutually exclusive output modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Pretty,
}

impl Format {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            _ => Err(crate::Error::InvalidFormat(s.to_string())),
        }
    }
}

/// Everything a formatter needs for one line.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    /// Already rendered with the configured date format.
    pub time: &'a str,
    /// Attached tags in attachment order, base tags first.
    pub tags: &'a [Tag],
    pub message: &'a str,
    /// `file:line`, present only when the logger has debug enabled.
    pub caller: Option<&'a str>,
}

impl Entry<'_> {
    /// Renders the entry without the trailing newline.
    #[must_use]
    pub fn render(&self, format: Format, palette: Option<&Palette>) -> String {
        match format {
            Format::Json => json::format(self),
            Format::Pretty => pretty::format(self, palette),
        }
    }
}
