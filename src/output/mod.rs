//! The byte destination every formatted line lands in. Anything that implements
//! `io::Write + Send` works; stdout, stderr, files and an in-memory buffer are built in.

mod file;
mod memory;

pub use file::open_file;
pub use memory::MemorySink;

use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Which standard stream, if any, a sink writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
    Other,
}

/// Owned, type-erased writer held behind the context's sink lock.
pub struct Sink {
    name: String,
    stream: Stream,
    writer: Box<dyn Write + Send>,
}

impl Sink {
    /// Default destination.
    #[must_use]
    pub fn stdout() -> Self {
        Self::named("stdout", Stream::Stdout, io::stdout())
    }

    #[must_use]
    pub fn stderr() -> Self {
        Self::named("stderr", Stream::Stderr, io::stderr())
    }

    /// Appends to the file at `path`, creating it and its parent directories.
    ///
    /// # Errors
    /// I/O errors from creating directories or opening the file.
    pub fn file(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let (resolved, file) = open_file(path.as_ref())?;
        Ok(Self::named(resolved.display().to_string(), Stream::Other, file))
    }

    /// Any caller-supplied writer.
    ///
    /// The writer runs while the context's sink lock is held. A record it logs
    /// through the same context on the same thread is dropped with a diagnostic;
    /// one logged from another thread it waits on would deadlock.
    #[must_use]
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self::named("writer", Stream::Other, writer)
    }

    /// Config and CLI name sinks as `stdout`, `stderr`, or a file path.
    ///
    /// # Errors
    /// I/O errors from opening a file target.
    pub fn open(target: &str) -> Result<Self, crate::Error> {
        match target {
            "" | "stdout" | "-" => Ok(Self::stdout()),
            "stderr" => Ok(Self::stderr()),
            path => Self::file(path),
        }
    }

    fn named(name: impl Into<String>, stream: Stream, writer: impl Write + Send + 'static) -> Self {
        Self {
            name: name.into(),
            stream,
            writer: Box::new(writer),
        }
    }

    /// Where lines go, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Only stdout and stderr can be terminals; files and custom writers never are.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self.stream {
            Stream::Stdout => io::stdout().is_terminal(),
            Stream::Stderr => io::stderr().is_terminal(),
            Stream::Other => false,
        }
    }

    /// One formatted line, newline included, in a single `write_all`.
    pub(crate) fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("name", &self.name).finish()
    }
}

impl From<MemorySink> for Sink {
    fn from(sink: MemorySink) -> Self {
        Self::named("memory", Stream::Other, sink)
    }
}
