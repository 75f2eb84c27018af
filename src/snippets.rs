//! The cheatsheet entry point: a single fixed banner line.

use std::io::{self, ErrorKind, Write};

pub const BANNER: &str = "Go cheatsheet snippets";

/// Prints [`BANNER`] followed by a newline to stdout.
pub fn print_banner() {
    print_banner_to(&mut io::stdout().lock());
}

/// Writes the banner to `out` without ever failing. A closed reader is not an
/// error; anything else is logged and dropped.
pub fn print_banner_to<W: Write>(out: &mut W) {
    match write_banner(out).and_then(|()| out.flush()) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed before banner was written");
        }
        Err(err) => tracing::warn!(error = %err, "failed to write banner"),
    }
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{BANNER}")
}
