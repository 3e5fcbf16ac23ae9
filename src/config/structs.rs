//! Configuration struct definitions.

use crate::fmt::{Color, Palette};
use crate::record::Value;
use serde::Deserialize;

/// Per-style color overrides as `#RRGGBB`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Timestamps, caller and tag keys.
    pub soft: Option<String>,
    /// Message and tag values.
    pub emphasized: Option<String>,
    /// Error values.
    pub error: Option<String>,
}

impl PaletteConfig {
    /// Unset entries keep the default palette's colors.
    #[must_use]
    pub fn to_palette(&self) -> Palette {
        let defaults = Palette::default();
        let pick = |hex: Option<&str>, fallback: Color| hex.map_or(fallback, Color::from_hex);
        Palette {
            soft: pick(self.soft.as_deref(), defaults.soft),
            emphasized: pick(self.emphasized.as_deref(), defaults.emphasized),
            error: pick(self.error.as_deref(), defaults.error),
        }
    }
}

/// A base tag value as written in TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<TagValue> for Value {
    fn from(v: TagValue) -> Self {
        match v {
            TagValue::Int(n) => Self::Int(n),
            TagValue::Float(x) => Self::Float(x),
            TagValue::Str(s) => Self::Str(s),
        }
    }
}
