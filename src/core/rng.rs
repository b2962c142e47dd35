//! Fair binary outcomes with deterministic seeding.
//!
//! ## Key Features
//!
//! - **Unbiased**: `flip()` is true with probability exactly 0.5, independent
//!   across calls. The draw compares a uniform float against 0.5; it is never
//!   expressed as a ratio of integers (which would truncate to a constant).
//! - **Deterministic**: Same seed produces an identical flip sequence.
//! - **Injectable**: The `OutcomeSource` trait lets tests script every draw.
//! - **Serializable**: O(1) state capture and restore via `FairRngState`.
//!
//! ## Test Usage
//!
//! ```
//! use fairplay::core::{OutcomeSource, Scripted};
//!
//! let mut outcomes = Scripted::new([true, false]);
//! assert!(outcomes.flip());
//! assert!(!outcomes.flip());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A source of independent binary outcomes.
///
/// Production code uses [`FairRng`]; tests use [`Scripted`] to pin the
/// result of each draw.
pub trait OutcomeSource {
    /// Draw one binary outcome. `true` means the wager is won.
    fn flip(&mut self) -> bool;
}

/// Fair coin flips backed by a seeded ChaCha8 stream.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// The seed is retained so state capture stays O(1) regardless of how many
/// flips have been drawn.
#[derive(Clone, Debug)]
pub struct FairRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl FairRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    ///
    /// The generated seed is retained, so the stream can still be captured
    /// and replayed with `state()` / `from_state()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one fair coin flip: true with probability 0.5.
    pub fn flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> FairRngState {
        FairRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &FairRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl OutcomeSource for FairRng {
    fn flip(&mut self) -> bool {
        FairRng::flip(self)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many flips have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed outcome sequence. Test support.
///
/// Panics if flipped more times than outcomes were supplied, which surfaces
/// a test that consumes more draws than it scripted.
#[derive(Clone, Debug)]
pub struct Scripted {
    outcomes: VecDeque<bool>,
}

impl Scripted {
    /// Create a scripted source from an outcome sequence.
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
        }
    }

    /// Number of outcomes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }
}

impl OutcomeSource for Scripted {
    fn flip(&mut self) -> bool {
        self.outcomes
            .pop_front()
            .unwrap_or_else(|| panic!("scripted outcomes exhausted"))
    }
}
