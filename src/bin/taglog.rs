//! `taglog` emits one structured log line from the shell.
//!
//! Usage:
//!   taglog [--format json|pretty] [--tag key=value]... [--error TEXT] <message>...

use clap::Parser;
use std::process::ExitCode;
use taglog::cli::{Cli, run};

fn main() -> ExitCode {
    run(Cli::parse())
}
