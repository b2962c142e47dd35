//! Core primitives shared by both components: random outcome sources.
//!
//! Game rules never touch an RNG directly; they draw through the
//! `OutcomeSource` trait so that tests can substitute scripted outcomes.

pub mod rng;

pub use rng::{FairRng, FairRngState, OutcomeSource, Scripted};
