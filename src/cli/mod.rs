//! Shell scripts need a way to emit a structured line in the same format as the
//! application they sit next to. The `taglog` binary emits exactly one record.

use crate::config::Config;
use crate::context::Context;
use crate::fmt::{ColorMode, Format};
use crate::internal;
use crate::logger::Logger;
use crate::record::Value;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

/// taglog - Emit one structured log line.
#[derive(Debug, Parser)]
#[command(name = "taglog", version, about = "Emit one structured log line")]
pub struct Cli {
    /// Output format (overrides config)
    #[arg(long, value_parser = parse_format)]
    pub format: Option<Format>,
    /// Color mode for pretty output (overrides config)
    #[arg(long, value_parser = parse_color_mode)]
    pub color: Option<ColorMode>,
    /// `rfc3339` or a strftime pattern (overrides config)
    #[arg(long)]
    pub date_format: Option<String>,
    /// Destination: stdout, stderr, or a file path (overrides config)
    #[arg(long)]
    pub output: Option<String>,
    /// Config file (default: the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Mark the record as debug: written only when the config sets `debug = true`
    #[arg(long)]
    pub debug: bool,
    /// Tag as key=value; repeatable, order is kept
    #[arg(short, long = "tag", value_parser = parse_tag)]
    pub tags: Vec<(String, Value)>,
    /// Attach an error description under the `error` key
    #[arg(short, long)]
    pub error: Option<String>,
    /// Message words, joined by spaces
    pub message: Vec<String>,
}

fn parse_format(s: &str) -> Result<Format, crate::Error> {
    s.parse()
}

fn parse_color_mode(s: &str) -> Result<ColorMode, crate::Error> {
    s.parse()
}

/// Splits `key=value` at the first `=`.
///
/// # Errors
/// Returns `Error::InvalidTag` when there is no `=` or the key is empty.
pub fn parse_tag(s: &str) -> Result<(String, Value), crate::Error> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), parse_value(value))),
        _ => Err(crate::Error::InvalidTag(s.to_string())),
    }
}

/// Integers first, then finite floats, otherwise text.
#[must_use]
pub fn parse_value(s: &str) -> Value {
    if let Ok(n) = s.parse::<i64>() {
        return Value::Int(n);
    }
    match s.parse::<f64>() {
        Ok(x) if x.is_finite() => Value::Float(x),
        _ => Value::Str(s.to_string()),
    }
}

impl Cli {
    /// Command-line flags layered over the loaded config.
    ///
    /// # Errors
    /// Config file read or parse failures.
    pub fn resolve_config(&self) -> Result<Config, crate::Error> {
        let mut config = base_config(self.config.as_deref(), Config::get_config_path())?;
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(color) = self.color {
            config.colors = color;
        }
        if let Some(date_format) = &self.date_format {
            config.date_format.clone_from(date_format);
        }
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        Ok(config)
    }
}

/// The config file is optional, so a platform without a config directory gets defaults.
fn base_config(
    explicit: Option<&Path>,
    default_path: Result<PathBuf, crate::Error>,
) -> Result<Config, crate::Error> {
    match (explicit, default_path) {
        (Some(path), _) => Config::load_from(path),
        (None, Ok(path)) => Config::load_from(&path),
        (None, Err(crate::Error::ConfigDirNotFound)) => Ok(Config::default()),
        (None, Err(e)) => Err(e),
    }
}

/// Emits the record described by `cli`.
#[must_use]
pub fn run(cli: Cli) -> ExitCode {
    let config = match cli.resolve_config() {
        Ok(c) => c,
        Err(e) => {
            internal::error("CLI", &format!("Error loading config: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let context = Arc::new(Context::new());
    if let Err(e) = config.apply(&context) {
        internal::error("CLI", &format!("Invalid output settings: {e}"));
        return ExitCode::FAILURE;
    }
    if cli.debug && !config.debug {
        return ExitCode::SUCCESS;
    }

    // Debug stays off on the logger: its caller field would always name this file
    let logger = Logger::builder(context).tags(config.base_tags()).build();

    let mut record = logger.log();
    for (key, value) in cli.tags {
        record = record.tag(key, value);
    }
    if let Some(error) = cli.error {
        record = record.tag(crate::record::ERROR_KEY, Value::Error(error));
    }

    match record.try_msg(cli.message.join(" ")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
