//! Renders the clock's instant into the `time` field.

use crate::internal;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::fmt::{self, Write};
use std::str::FromStr;

/// How the `time` field is written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `2020-02-02T02:02:02Z`: whole seconds, `Z` for UTC, `+hh:mm` otherwise.
    #[default]
    Rfc3339,
    /// A validated strftime pattern.
    Custom(String),
}

impl DateFormat {
    /// Checks the pattern once, when it is configured.
    ///
    /// # Errors
    /// Returns `Error::InvalidDateFormat` if chrono can't parse the pattern.
    pub fn custom(pattern: impl Into<String>) -> Result<Self, crate::Error> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(crate::Error::InvalidDateFormat(pattern));
        }
        Ok(Self::Custom(pattern))
    }

    #[must_use]
    pub fn format(&self, instant: &DateTime<FixedOffset>) -> String {
        match self {
            Self::Rfc3339 => instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            Self::Custom(pattern) => {
                // chrono's `to_string` panics on a bad pattern; `write!` reports it instead
                let mut out = String::new();
                if write!(out, "{}", instant.format(pattern)).is_err() {
                    internal::warn("TIME", &format!("Cannot render date format '{pattern}'"));
                    return instant.to_rfc3339_opts(SecondsFormat::Secs, true);
                }
                out
            }
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rfc3339 => f.write_str("rfc3339"),
            Self::Custom(pattern) => f.write_str(pattern),
        }
    }
}

impl FromStr for DateFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("rfc3339") {
            Ok(Self::Rfc3339)
        } else {
            Self::custom(s)
        }
    }
}
