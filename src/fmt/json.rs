//! Single-line JSON. Field order is fixed by the record: `time`, then tags in
//! attachment order, then `message`, then `caller` when debug is on.
//!
//! Duplicate keys are written twice. Strict parsers keep the last one; line-oriented
//! log processors see both.

use super::{CALLER_KEY, Entry, MESSAGE_KEY, TIME_KEY};
use crate::record::Value;

/// Written in place of a value JSON cannot represent.
pub const PLACEHOLDER: &str = "\"<?>\"";

#[must_use]
pub fn format(entry: &Entry<'_>) -> String {
    let mut out = String::with_capacity(64 + entry.message.len() + entry.tags.len() * 24);
    out.push('{');
    push_string_field(&mut out, TIME_KEY, entry.time);

    for tag in entry.tags {
        out.push(',');
        push_key(&mut out, &tag.key);
        out.push_str(&encode(&tag.value));
    }

    out.push(',');
    push_string_field(&mut out, MESSAGE_KEY, entry.message);

    if let Some(caller) = entry.caller {
        out.push(',');
        push_string_field(&mut out, CALLER_KEY, caller);
    }

    out.push('}');
    out
}

/// JSON encoding of a single value.
#[must_use]
pub fn encode(value: &Value) -> String {
    match value {
        Value::Str(s) | Value::Error(s) => quote(s),
        Value::Int(n) => n.to_string(),
        Value::Float(x) if x.is_finite() => x.to_string(),
        Value::Float(_) => PLACEHOLDER.to_string(),
    }
}

fn push_key(out: &mut String, key: &str) {
    out.push_str(&quote(key));
    out.push(':');
}

fn push_string_field(out: &mut String, key: &str, value: &str) {
    push_key(out, key);
    out.push_str(&quote(value));
}

fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| PLACEHOLDER.to_string())
}
