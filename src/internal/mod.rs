//! taglog's own diagnostics. A failing sink can't be used to report its own failure,
//! so these go straight to stderr and never through a `Context`.

use std::io::{self, Write};

fn report(level: &str, scope: &str, msg: &str) {
    // Nothing left to report to if stderr itself is gone
    let _ = writeln!(io::stderr().lock(), "taglog {level} [{scope}] {msg}");
}

/// Recoverable oddities: a fallback was used, the line still went out.
pub fn warn(scope: &str, msg: &str) {
    report("warn", scope, msg);
}

/// The line was lost.
pub fn error(scope: &str, msg: &str) {
    report("error", scope, msg);
}
