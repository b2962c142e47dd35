//! Factorial over `f64`.
//!
//! The series needs factorials up to 100!, which overflows every fixed-width
//! integer type (u128 gives out at 35!). `f64` represents 100! ≈ 9.3e157
//! without trouble and only saturates to infinity past 170!, where the series
//! term `1/inf == 0` stops contributing rather than corrupting the sum.

/// Returns n! = 1 * 2 * 3 * ... * n, with `factorial(0) == 1.0`.
///
/// Strictly positive for every input: the accumulator starts at 1 and the
/// loop multiplies by 1 through n inclusive, never by 0.
///
/// ```
/// use fairplay::series::factorial;
///
/// assert_eq!(factorial(0), 1.0);
/// assert_eq!(factorial(5), 120.0);
/// ```
#[must_use]
pub fn factorial(n: u32) -> f64 {
    let mut product = 1.0;
    for i in 1..=n {
        product *= f64::from(i);
    }
    product
}
