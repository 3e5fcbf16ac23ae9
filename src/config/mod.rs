//! TOML configuration: output settings for a [`Context`] plus debug switch and base
//! tags for a [`Logger`].
//!
//! ```toml
//! format = "pretty"
//! date_format = "%Y-%m-%d %H:%M:%S"
//! colors = "never"
//! output = "~/.local/state/myapp/app.log"
//! debug = true
//!
//! [tags]
//! service = "api"
//!
//! [palette]
//! soft = "#6272a4"
//! ```

mod structs;

pub use structs::{PaletteConfig, TagValue};

use crate::context::Context;
use crate::fmt::{ColorMode, DateFormat, Format};
use crate::internal;
use crate::logger::Logger;
use crate::output::Sink;
use crate::record::Tag;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const CONFIG_DIR: &str = "taglog";
const CONFIG_FILE: &str = "taglog.toml";

/// An empty file is a valid config: `#[serde(default)]` fills every field.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: Format,
    /// `rfc3339` or a strftime pattern.
    pub date_format: String,
    pub colors: ColorMode,
    /// `stdout`, `stderr`, or a file path (`~` expanded).
    pub output: String,
    pub debug: bool,
    /// TOML tables don't keep order, so base tags are applied sorted by key.
    pub tags: BTreeMap<String, TagValue>,
    pub palette: PaletteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Format::Json,
            date_format: "rfc3339".to_string(),
            colors: ColorMode::Auto,
            output: "stdout".to_string(),
            debug: false,
            tags: BTreeMap::new(),
            palette: PaletteConfig::default(),
        }
    }
}

impl Config {
    /// Reads `<config dir>/taglog/taglog.toml`, falling back to defaults when it
    /// doesn't exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file is invalid TOML.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// TOML syntax errors and unknown enum values.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// XDG config location (`~/.config/taglog/taglog.toml` on Linux).
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR).join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// Returns `Error::InvalidDateFormat` for a bad strftime pattern.
    pub fn parse_date_format(&self) -> Result<DateFormat, crate::Error> {
        self.date_format.parse()
    }

    /// Base tags in key order.
    #[must_use]
    pub fn base_tags(&self) -> Vec<Tag> {
        self.tags
            .iter()
            .map(|(k, v)| Tag::new(k.clone(), v.clone()))
            .collect()
    }

    /// Pushes the output settings into `context`. Everything that can fail is
    /// checked first, so a failed apply leaves the context untouched.
    ///
    /// # Errors
    /// Invalid date format, or a file sink that can't be opened.
    pub fn apply(&self, context: &Context) -> Result<(), crate::Error> {
        let date_format = self.parse_date_format()?;
        let sink = Sink::open(&self.output)?;

        context.set_format(self.format);
        context.set_date_format(date_format);
        context.set_color_mode(self.colors);
        context.set_palette(self.palette.to_palette());
        context.set_sink(sink);
        Ok(())
    }

    /// A logger with this config's debug switch and base tags.
    #[must_use]
    pub fn logger(&self, context: Arc<Context>) -> Logger {
        Logger::builder(context)
            .debug(self.debug)
            .tags(self.base_tags())
            .build()
    }

    /// Builds a fresh context and logger from this config. Falls back to default
    /// output settings (with a warning) if the config can't be applied.
    #[must_use]
    pub fn build_logger(&self) -> Logger {
        let context = Arc::new(Context::new());
        if let Err(e) = self.apply(&context) {
            internal::warn("CONFIG", &format!("Using default output settings: {e}"));
        }
        self.logger(context)
    }
}
