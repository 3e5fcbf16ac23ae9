//! `taglog` - Tagged structured logging with JSON and pretty output.
//!
//! A logger hands out single-use records; tags are chained onto a record and the
//! terminal `msg` call writes one line to the sink:
//!
//! - JSON: `{"time":"2020-02-02T02:02:02Z","service":"api","items":12,"message":"hello"}`
//! - Pretty: `2020-02-02T02:02:02Z hello service=api items=12`
//!
//! Debug records are only written when the logger's debug switch is on, and a
//! logger with debug on also reports the caller's `file:line`.
//!
//! # Example
//!
//! ```
//! use taglog::{Context, FixedClock, Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let context = Context::builder()
//!     .clock(FixedClock::parse("2020-02-02T02:02:02Z").unwrap())
//!     .sink(sink.clone())
//!     .build();
//! let logger = Logger::new(context);
//!
//! logger.log().str("service", "api").int("items", 12).msg("hello");
//! logger.debug().msg("dropped: debug is off");
//!
//! assert_eq!(
//!     sink.contents(),
//!     "{\"time\":\"2020-02-02T02:02:02Z\",\"service\":\"api\",\"items\":12,\"message\":\"hello\"}\n"
//! );
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `taglog` binary

pub mod clock;
pub mod config;
pub mod context;
mod error;
pub mod fmt;
pub mod internal;
pub mod logger;
pub mod output;
pub mod record;

#[cfg(feature = "cli")]
pub mod cli;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use context::{Context, ContextBuilder, Settings};
pub use error::Error;
pub use fmt::{ColorMode, DateFormat, Format, Palette, Style};
pub use logger::global::{
    context, debug, debug_enabled, default_logger, init, log, set_clock, set_color_mode,
    set_date_format, set_debug, set_default_logger, set_format, set_pretty, set_sink,
};
pub use logger::{Logger, LoggerBuilder};
pub use output::{MemorySink, Sink};
pub use record::{Record, Tag, Value};
