//! Base tags are fixed once a logger exists, so they are collected here first.

use super::Logger;
use crate::context::Context;
use crate::record::{Tag, Value};
use std::sync::Arc;

#[derive(Debug)]
pub struct LoggerBuilder {
    context: Arc<Context>,
    debug: bool,
    tags: Vec<Tag>,
}

impl LoggerBuilder {
    #[must_use]
    pub const fn new(context: Arc<Context>) -> Self {
        Self {
            context,
            debug: false,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Appends a base tag; order is kept.
    #[must_use]
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.tags.push(Tag::new(key, value));
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger::from_parts(self.context, self.debug, self.tags)
    }
}
