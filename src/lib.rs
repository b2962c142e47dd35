//! # fairplay
//!
//! Two small, independent command-line components sharing one library:
//!
//! 1. **Series approximation** (`series`): estimates Euler's number e with a
//!    truncated Taylor series `Σ 1/n!` and checks the result against the
//!    platform constant.
//!
//! 2. **Stake game** (`game`): an interactive wagering loop. The player bets
//!    part of a virtual balance on a fair coin flip each turn until they quit
//!    or run out of money.
//!
//! ## Design Principles
//!
//! 1. **Deterministic randomness**: All random outcomes flow through
//!    [`core::OutcomeSource`], so tests can seed or script every draw.
//!
//! 2. **I/O at the edges**: Game logic is pure state mutation on
//!    [`game::Session`]; the interactive loop in [`game::console`] is generic
//!    over `BufRead`/`Write` and runs against in-memory buffers in tests.
//!
//! 3. **Recoverable input errors**: Bad wagers (negative, over-balance,
//!    non-numeric) re-prompt without consuming a turn. Nothing a user types
//!    can crash a session.
//!
//! ## Modules
//!
//! - `core`: Fair outcome source (seeded ChaCha8 RNG, scripted test source)
//! - `series`: Factorial, series summation, run record and report
//! - `game`: Wager validation, session state, interactive console loop

pub mod core;
pub mod game;
pub mod series;

// Re-export commonly used types
pub use crate::core::{FairRng, FairRngState, OutcomeSource, Scripted};

pub use crate::series::{approximate, factorial, ApproximationRun, DEFAULT_LIMIT, TOLERANCE};

pub use crate::game::{
    Session, SessionConfig, SessionEnd, TurnResult, WagerDecision, WagerError,
};
