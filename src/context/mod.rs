//! Shared output configuration. Every logger emits through a `Context`; the settings
//! are read once per record under a read lock and the sink is written under a mutex,
//! so one line never interleaves with another from the same context.
//!
//! Mode and sink are separate locks. A record emitted between `set_format` and
//! `set_sink` uses the new mode with the old sink.

mod builder;

pub use builder::ContextBuilder;

use crate::clock::{Clock, SystemClock};
use crate::fmt::{ColorMode, DateFormat, Entry, Format, Palette};
use crate::internal;
use crate::output::Sink;
use std::cell::RefCell;
use std::io;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

thread_local! {
    /// Addresses of the contexts this thread is writing through right now.
    static WRITING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Marks a context as busy on this thread until dropped.
struct WriteGuard(usize);

impl WriteGuard {
    /// `None` if this thread is already inside `context`'s sink.
    fn enter(context: &Context) -> Option<Self> {
        let id = std::ptr::from_ref(context).addr();
        WRITING.with_borrow_mut(|busy| {
            if busy.contains(&id) {
                return None;
            }
            busy.push(id);
            Some(Self(id))
        })
    }
}

impl Drop for WriteGuard {
    fn drop(&mut self) {
        WRITING.with_borrow_mut(|busy| busy.retain(|id| *id != self.0));
    }
}

/// Snapshot of everything but the sink. Cloning is cheap: the clock is shared.
#[derive(Clone)]
pub struct Settings {
    pub format: Format,
    pub date_format: DateFormat,
    pub clock: Arc<dyn Clock>,
    pub color_mode: ColorMode,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: Format::Json,
            date_format: DateFormat::Rfc3339,
            clock: Arc::new(SystemClock),
            color_mode: ColorMode::Auto,
            palette: Palette::default(),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("format", &self.format)
            .field("date_format", &self.date_format)
            .field("color_mode", &self.color_mode)
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct Context {
    settings: RwLock<Settings>,
    sink: Mutex<Sink>,
}

impl Context {
    /// JSON to stdout, RFC 3339 timestamps, system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    pub(crate) fn from_parts(settings: Settings, sink: Sink) -> Self {
        Self {
            settings: RwLock::new(settings),
            sink: Mutex::new(sink),
        }
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn format(&self) -> Format {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .format
    }

    pub fn set_format(&self, format: Format) {
        self.update(|s| s.format = format);
    }

    /// Shorthand for switching between pretty and JSON.
    pub fn set_pretty(&self, pretty: bool) {
        self.set_format(if pretty { Format::Pretty } else { Format::Json });
    }

    pub fn set_date_format(&self, date_format: DateFormat) {
        self.update(|s| s.date_format = date_format);
    }

    pub fn set_clock(&self, clock: impl Clock + 'static) {
        let clock: Arc<dyn Clock> = Arc::new(clock);
        self.update(|s| s.clock = clock);
    }

    pub fn set_color_mode(&self, color_mode: ColorMode) {
        self.update(|s| s.color_mode = color_mode);
    }

    pub fn set_palette(&self, palette: Palette) {
        self.update(|s| s.palette = palette);
    }

    /// Swaps the destination; returns the previous one.
    pub fn set_sink(&self, sink: impl Into<Sink>) -> Sink {
        let mut guard = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, sink.into())
    }

    /// Name of the current sink, for diagnostics.
    #[must_use]
    pub fn sink_name(&self) -> String {
        self.sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .name()
            .to_string()
    }

    fn update(&self, f: impl FnOnce(&mut Settings)) {
        let mut guard = self
            .settings
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }

    /// Formats one record and writes it as a single line.
    ///
    /// # Errors
    /// The sink's I/O error, and a record logged from inside this context's own sink.
    pub(crate) fn write(
        &self,
        tags: &[crate::record::Tag],
        message: &str,
        caller: Option<&str>,
    ) -> Result<(), crate::Error> {
        // A sink that logs through its own context would wait on the sink lock forever
        let Some(_guard) = WriteGuard::enter(self) else {
            internal::error("SINK", "Dropped a record logged from inside its own sink");
            return Err(io::Error::other("record logged from inside its own sink").into());
        };
        let settings = self.settings();
        let time = settings.date_format.format(&settings.clock.now());
        let entry = Entry {
            time: &time,
            tags,
            message,
            caller,
        };

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let colored = settings.format == Format::Pretty
            && settings.color_mode.enabled(sink.is_terminal());
        let palette = colored.then_some(&settings.palette);
        let mut line = entry.render(settings.format, palette);
        line.push('\n');

        if let Err(e) = sink.write_line(&line) {
            internal::error("SINK", &format!("Write to {} failed: {e}", sink.name()));
            return Err(e.into());
        }
        Ok(())
    }
}
