//! Series summation and the run record it produces.
//!
//! ## ApproximationRun
//!
//! One immutable record per invocation: the term limit, the computed sum,
//! the platform constant, the absolute error, and a pass flag against the
//! fixed tolerance. The record renders the three-line report the
//! `approx-e` binary prints.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use super::factorial::factorial;

/// Number of series terms the `approx-e` binary sums.
///
/// Far more than needed: the partial sum is already within `1e-4` of e by
/// eight terms, and terms past n = 17 or so underflow below f64 resolution.
pub const DEFAULT_LIMIT: u32 = 100;

/// Absolute error below which a run passes.
pub const TOLERANCE: f64 = 1e-4;

/// Returns the summation 1/0! + 1/1! + 1/2! + ... + 1/limit!.
///
/// Pure function of `limit`. Every term is positive, so the result is
/// monotonically non-decreasing in `limit` and converges to e.
///
/// ```
/// use fairplay::series::approximate;
///
/// assert_eq!(approximate(0), 1.0);
/// assert_eq!(approximate(1), 2.0);
/// assert_eq!(approximate(2), 2.5);
/// ```
#[must_use]
pub fn approximate(limit: u32) -> f64 {
    let mut sum = 0.0;
    for n in 0..=limit {
        sum += 1.0 / factorial(n);
    }
    sum
}

/// Outcome of one approximation run. Immutable once computed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApproximationRun {
    /// Number of series terms summed (inclusive upper index).
    pub limit: u32,
    /// The truncated series sum.
    pub computed_value: f64,
    /// The platform's best constant for e.
    pub true_value: f64,
    /// `|computed_value - true_value|`.
    pub absolute_error: f64,
    /// True iff `absolute_error < TOLERANCE`.
    pub passed: bool,
}

impl ApproximationRun {
    /// Sum the series to `limit` terms and compare against `f64::consts::E`.
    #[must_use]
    pub fn execute(limit: u32) -> Self {
        let computed_value = approximate(limit);
        let true_value = std::f64::consts::E;
        let absolute_error = (computed_value - true_value).abs();

        Self {
            limit,
            computed_value,
            true_value,
            absolute_error,
            passed: absolute_error < TOLERANCE,
        }
    }

    /// Verdict line for the report.
    #[must_use]
    pub fn verdict(&self) -> &'static str {
        if self.passed {
            "It works!"
        } else {
            "It didn't work."
        }
    }

    /// Write the three-line report: true value, computed value, verdict.
    pub fn report(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "True value:     e = {}", self.true_value)?;
        writeln!(out, "Formula result: e = {}", self.computed_value)?;
        writeln!(out, "{}", self.verdict())
    }
}
