//! Interactive stake game on stdin/stdout.
//!
//! Starts a session with the default $10 balance and an entropy-seeded fair
//! coin, then runs the console loop until the player quits or goes bust.

use std::io;

use fairplay::core::FairRng;
use fairplay::game::{self, SessionConfig};

fn main() -> io::Result<()> {
    let mut session = SessionConfig::new().build();

    let stdin = io::stdin();
    let stdout = io::stdout();
    game::run(
        &mut session,
        stdin.lock(),
        stdout.lock(),
        FairRng::from_entropy(),
    )?;

    Ok(())
}
