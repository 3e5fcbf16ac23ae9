//! Human-readable line: `<time> <message> [(<caller>)] [key=value ...]`.

use super::{Entry, Palette, Style};

/// Stands in for an empty message so the columns after it stay aligned.
pub const EMPTY_MESSAGE: &str = "_";

/// `palette` is `None` when colors are off; the line then carries no escapes.
#[must_use]
pub fn format(entry: &Entry<'_>, palette: Option<&Palette>) -> String {
    let paint = |text: &str, style: Style| {
        palette.map_or_else(|| text.to_string(), |p| p.render(text, style))
    };

    let mut parts = Vec::with_capacity(entry.tags.len() + 3);
    parts.push(paint(entry.time, Style::Soft));

    let message = if entry.message.is_empty() {
        EMPTY_MESSAGE
    } else {
        entry.message
    };
    parts.push(paint(message, Style::Emphasized));

    if let Some(caller) = entry.caller {
        parts.push(paint(&format!("({caller})"), Style::Soft));
    }

    for tag in entry.tags {
        let value_style = if tag.is_error() {
            Style::Error
        } else {
            Style::Emphasized
        };
        let key = paint(&format!("{}=", tag.key), Style::Soft);
        let value = paint(&tag.value.to_string(), value_style);
        parts.push(key + &value);
    }

    parts.join(" ")
}
