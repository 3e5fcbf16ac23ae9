//! Tag values are a closed set so every formatter knows exactly how to render each kind.

use std::fmt;

/// Key under which `Record::err` attaches errors.
pub const ERROR_KEY: &str = "error";

/// The value half of a tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    /// The error's `Display` text, captured when it was attached.
    Error(String),
}

impl Value {
    /// Captures an error's description; the error itself isn't kept alive past the call.
    #[must_use]
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::Error(err.to_string())
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Locale-independent: base-10 integers, shortest round-trip floats (`3.14`, `12`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) | Self::Error(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

macro_rules! int_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

int_value!(i8, i16, i32, i64, u8, u16, u32);

/// One key/value pair. Keys are not validated and may repeat.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub key: String,
    pub value: Value,
}

impl Tag {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Pretty output colors a tag red when it is keyed `error` or holds an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.key == ERROR_KEY || self.value.is_error()
    }
}
