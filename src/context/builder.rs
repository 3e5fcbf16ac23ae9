//! Stepwise construction so tests can pin every setting in one expression.

use super::{Context, Settings};
use crate::clock::Clock;
use crate::fmt::{ColorMode, DateFormat, Format, Palette};
use crate::output::Sink;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct ContextBuilder {
    settings: Settings,
    sink: Option<Sink>,
}

impl ContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn format(mut self, format: Format) -> Self {
        self.settings.format = format;
        self
    }

    #[must_use]
    pub const fn pretty(self, pretty: bool) -> Self {
        self.format(if pretty { Format::Pretty } else { Format::Json })
    }

    #[must_use]
    pub fn date_format(mut self, date_format: DateFormat) -> Self {
        self.settings.date_format = date_format;
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.settings.clock = Arc::new(clock);
        self
    }

    #[must_use]
    pub const fn colors(mut self, color_mode: ColorMode) -> Self {
        self.settings.color_mode = color_mode;
        self
    }

    #[must_use]
    pub const fn palette(mut self, palette: Palette) -> Self {
        self.settings.palette = palette;
        self
    }

    /// Defaults to stdout when never called.
    #[must_use]
    pub fn sink(mut self, sink: impl Into<Sink>) -> Self {
        self.sink = Some(sink.into());
        self
    }

    /// Contexts are always shared between loggers, so this hands back an `Arc`.
    #[must_use]
    pub fn build(self) -> Arc<Context> {
        Arc::new(Context::from_parts(
            self.settings,
            self.sink.unwrap_or_default(),
        ))
    }
}
