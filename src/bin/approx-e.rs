//! Approximate e with a truncated Taylor series and report the result.
//!
//! Prints three lines: the platform constant, the series sum, and a verdict.
//! Exits 0 either way; the check is informational, not a process failure.

use std::io;

use fairplay::series::{ApproximationRun, DEFAULT_LIMIT};

fn main() -> io::Result<()> {
    let run = ApproximationRun::execute(DEFAULT_LIMIT);
    let stdout = io::stdout();
    run.report(&mut stdout.lock())
}
