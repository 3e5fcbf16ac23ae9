//! Timestamps come from an injectable clock. Tests pin the instant so output lines
//! can be compared byte for byte.

use chrono::{DateTime, FixedOffset, Local};

/// `Send + Sync` so one clock can be shared by every logger on every thread.
pub trait Clock: Send + Sync {
    /// The instant stamped onto the record being emitted.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    #[must_use]
    pub const fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Test fixtures write instants as RFC 3339 literals (`2020-02-02T02:02:02Z`).
    ///
    /// # Errors
    /// Returns the chrono parse error when `s` is not valid RFC 3339.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(Self::new)
    }

    #[must_use]
    pub const fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}
