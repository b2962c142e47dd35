//! Taylor-series approximation of Euler's number.
//!
//! e = Σ 1/n! for n from 0 to infinity. Truncating the sum at a finite
//! `limit` gives an approximation; 100 terms land far inside the `1e-4`
//! tolerance the run record checks against.

pub mod approximation;
pub mod factorial;

pub use approximation::{approximate, ApproximationRun, DEFAULT_LIMIT, TOLERANCE};
pub use factorial::factorial;
