//! The single-use record builder returned by a logger's entry points.
//!
//! Attachment methods take and return the record by value; `msg`/`msgf` consume it.
//! A record can't be finalized twice or touched after finalization, the compiler
//! rejects both.

mod tag;

pub use tag::{ERROR_KEY, Tag, Value};

use crate::logger::Logger;
use std::fmt;
use std::ops::Deref;
use std::panic::Location;
use std::sync::Arc;

/// Written in the `caller` field when no source location is available.
pub const UNKNOWN_CALLER: &str = "unknown";

/// The logger a record reads its debug switch and context from. The default
/// logger can be replaced at any time, so records from it keep their own handle.
enum Origin<'a> {
    Borrowed(&'a Logger),
    Shared(Arc<Logger>),
}

impl Deref for Origin<'_> {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        match self {
            Self::Borrowed(logger) => logger,
            Self::Shared(logger) => logger,
        }
    }
}

#[must_use = "a record is only written by `msg` or `msgf`"]
pub struct Record<'a> {
    logger: Origin<'a>,
    /// Came from the debug entry point; gated again at emission.
    debug: bool,
    tags: Vec<Tag>,
}

impl<'a> Record<'a> {
    pub(crate) fn new(logger: &'a Logger, debug: bool) -> Self {
        Self::from_origin(Origin::Borrowed(logger), debug)
    }

    fn from_origin(logger: Origin<'a>, debug: bool) -> Self {
        let tags = logger.tags().to_vec();
        Self {
            logger,
            debug,
            tags,
        }
    }

    /// Appends a tag of any supported kind.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.tags.push(Tag::new(key, value));
        self
    }

    pub fn str(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tag(key, Value::Str(value.into()))
    }

    pub fn int(self, key: impl Into<String>, value: i64) -> Self {
        self.tag(key, Value::Int(value))
    }

    pub fn float(self, key: impl Into<String>, value: f64) -> Self {
        self.tag(key, Value::Float(value))
    }

    /// Short for `err_with("error", err)`.
    pub fn err<E: std::error::Error + ?Sized>(self, err: &E) -> Self {
        self.err_with(ERROR_KEY, err)
    }

    pub fn err_with<E: std::error::Error + ?Sized>(self, key: impl Into<String>, err: &E) -> Self {
        self.tag(key, Value::error(err))
    }

    /// Base tags followed by everything attached so far.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Whether this record came from the debug entry point.
    #[must_use]
    pub const fn is_debug(&self) -> bool {
        self.debug
    }

    /// A logger whose records start with the tags attached so far. Nothing is emitted.
    #[must_use]
    pub fn into_logger(self) -> Logger {
        Logger::from_parts(
            self.logger.context().clone(),
            self.logger.debug_enabled(),
            self.tags,
        )
    }

    /// Sets the message and writes the record. Sink failures are reported on stderr.
    #[track_caller]
    pub fn msg(self, text: impl Into<String>) {
        let _ = self.emit(&text.into(), Location::caller());
    }

    /// `msg` with `format_args!` input.
    #[track_caller]
    pub fn msgf(self, args: fmt::Arguments<'_>) {
        let _ = self.emit(&args.to_string(), Location::caller());
    }

    /// Like `msg`, but hands sink failures back to the caller.
    ///
    /// # Errors
    /// The sink's I/O error.
    #[track_caller]
    pub fn try_msg(self, text: impl Into<String>) -> Result<(), crate::Error> {
        self.emit(&text.into(), Location::caller())
    }

    fn emit(self, message: &str, location: &Location<'_>) -> Result<(), crate::Error> {
        // Read the flag now, not at entry, so toggles between the two are honored
        let debug_enabled = self.logger.debug_enabled();
        if self.debug && !debug_enabled {
            return Ok(());
        }

        let caller = debug_enabled.then(|| caller_location(location));
        self.logger
            .context()
            .write(&self.tags, message, caller.as_deref())
    }
}

impl Record<'static> {
    pub(crate) fn shared(logger: Arc<Logger>, debug: bool) -> Self {
        Self::from_origin(Origin::Shared(logger), debug)
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("debug", &self.debug)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

fn caller_location(location: &Location<'_>) -> String {
    if location.file().is_empty() {
        return UNKNOWN_CALLER.to_string();
    }
    format!("{}:{}", location.file(), location.line())
}
