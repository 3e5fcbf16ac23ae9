//! Process-wide default context and logger, for callers that don't want to thread
//! a `Logger` through their code.
//!
//! Both are created on first use via `OnceLock`, so concurrent first calls still
//! agree on a single instance. The default logger can be replaced afterwards;
//! records already handed out keep the logger they started from.

use super::Logger;
use crate::clock::Clock;
use crate::config::Config;
use crate::context::Context;
use crate::fmt::{ColorMode, DateFormat, Format};
use crate::output::Sink;
use crate::record::Record;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static CONTEXT: OnceLock<Arc<Context>> = OnceLock::new();
static DEFAULT_LOGGER: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

/// The context behind the default logger.
pub fn context() -> &'static Arc<Context> {
    CONTEXT.get_or_init(|| Arc::new(Context::new()))
}

fn default_slot() -> &'static RwLock<Arc<Logger>> {
    DEFAULT_LOGGER.get_or_init(|| RwLock::new(Arc::new(Logger::new(context().clone()))))
}

/// Debug off and no base tags until changed or replaced.
#[must_use]
pub fn default_logger() -> Arc<Logger> {
    default_slot()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Installs `logger` as the default logger; returns the previous one.
pub fn set_default_logger(logger: Logger) -> Arc<Logger> {
    let mut guard = default_slot()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *guard, Arc::new(logger))
}

/// Normal entry point on the default logger.
pub fn log() -> Record<'static> {
    Record::shared(default_logger(), false)
}

/// Debug entry point on the default logger.
pub fn debug() -> Record<'static> {
    Record::shared(default_logger(), true)
}

pub fn set_debug(enabled: bool) {
    default_logger().set_debug(enabled);
}

#[must_use]
pub fn debug_enabled() -> bool {
    default_logger().debug_enabled()
}

pub fn set_format(format: Format) {
    context().set_format(format);
}

pub fn set_pretty(pretty: bool) {
    context().set_pretty(pretty);
}

/// Returns the previous sink.
pub fn set_sink(sink: impl Into<Sink>) -> Sink {
    context().set_sink(sink)
}

pub fn set_clock(clock: impl Clock + 'static) {
    context().set_clock(clock);
}

pub fn set_date_format(date_format: DateFormat) {
    context().set_date_format(date_format);
}

pub fn set_color_mode(color_mode: ColorMode) {
    context().set_color_mode(color_mode);
}

/// Applies `config` to the global context and installs a default logger with the
/// config's debug switch and base tags.
///
/// # Errors
/// Invalid date format or a file sink that can't be opened. Nothing is changed
/// when this fails.
pub fn init(config: &Config) -> Result<(), crate::Error> {
    config.apply(context())?;
    set_default_logger(config.logger(context().clone()));
    Ok(())
}
