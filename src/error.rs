//! Unified error type for all taglog operations.

/// Error type for taglog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from a sink or a config file.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Unknown output format name.
    InvalidFormat(String),
    /// Unknown color mode name.
    InvalidColorMode(String),
    /// strftime pattern chrono can't render.
    InvalidDateFormat(String),
    /// Tag argument that isn't `key=value`.
    InvalidTag(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidFormat(s) => write!(f, "unknown output format: '{s}'"),
            Self::InvalidColorMode(s) => write!(f, "unknown color mode: '{s}'"),
            Self::InvalidDateFormat(s) => write!(f, "invalid date format: '{s}'"),
            Self::InvalidTag(s) => write!(f, "invalid tag (expected key=value): '{s}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
