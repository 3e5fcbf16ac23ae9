//! Loggers originate records. Each carries a debug switch and a list of base tags
//! prepended to every record, and emits through a shared [`Context`].

mod builder;
pub mod global;

pub use builder::LoggerBuilder;

use crate::context::Context;
use crate::record::{Record, Tag, Value};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Base tags are fixed after construction; only the debug switch can change,
/// and it can change through a shared reference.
pub struct Logger {
    context: Arc<Context>,
    debug: AtomicBool,
    tags: Vec<Tag>,
}

impl Logger {
    /// Debug off, no base tags.
    #[must_use]
    pub const fn new(context: Arc<Context>) -> Self {
        Self::from_parts(context, false, Vec::new())
    }

    #[must_use]
    pub fn builder(context: Arc<Context>) -> LoggerBuilder {
        LoggerBuilder::new(context)
    }

    pub(crate) const fn from_parts(context: Arc<Context>, debug: bool, tags: Vec<Tag>) -> Self {
        Self {
            context,
            debug: AtomicBool::new(debug),
            tags,
        }
    }

    /// Normal entry point: the record is always written.
    pub fn log(&self) -> Record<'_> {
        Record::new(self, false)
    }

    /// Debug entry point: the record is dropped unless debug is on when `msg` runs.
    pub fn debug(&self) -> Record<'_> {
        Record::new(self, true)
    }

    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    pub fn set_debug(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    /// A child logger with one more base tag.
    #[must_use]
    pub fn with(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut tags = self.tags.clone();
        tags.push(Tag::new(key, value));
        Self::from_parts(self.context.clone(), self.debug_enabled(), tags)
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub const fn context(&self) -> &Arc<Context> {
        &self.context
    }
}

/// Emits through the process-wide context.
impl Default for Logger {
    fn default() -> Self {
        Self::new(global::context().clone())
    }
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        Self::from_parts(self.context.clone(), self.debug_enabled(), self.tags.clone())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("debug", &self.debug_enabled())
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
