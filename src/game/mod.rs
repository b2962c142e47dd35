//! Interactive stake game: bet on a fair coin flip until you quit or bust.
//!
//! ## Structure
//!
//! - `wager`: classifies one raw integer input against the current balance
//! - `session`: the single mutable balance and per-turn resolution
//! - `console`: the blocking prompt/read/resolve loop, generic over I/O and
//!   outcome source so tests can drive it with buffers and scripted flips

pub mod console;
pub mod session;
pub mod wager;

pub use console::run;
pub use session::{Session, SessionConfig, SessionEnd, TurnResult};
pub use wager::{evaluate, WagerDecision, WagerError};
