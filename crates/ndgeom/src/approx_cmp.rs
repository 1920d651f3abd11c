//! Approximate comparison functions that automatically use [`ABS_TOLERANCE`]
//! and [`REL_TOLERANCE`].
//!
//! Two numbers are considered equal if they are within [`ABS_TOLERANCE`] of
//! each other, or within [`REL_TOLERANCE`] times the larger magnitude.

use crate::Float;

/// Absolute tolerance used for all approximate comparisons.
pub const ABS_TOLERANCE: Float = 1e-9;

/// Relative tolerance used for all approximate comparisons.
pub const REL_TOLERANCE: Float = 1e-9;

/// Compares two numbers, but considers them equal if they are separated by less
/// than the absolute or relative tolerance.
///
/// Handles infinity specially.
pub fn approx_eq(a: Float, b: Float) -> bool {
    // use native float equality to handle infinities
    a == b
        || approx::relative_eq!(a, b, epsilon = ABS_TOLERANCE, max_relative = REL_TOLERANCE)
}

/// Returns whether `x` is within [`ABS_TOLERANCE`] of zero.
///
/// Relative tolerance is meaningless when comparing against zero, so callers
/// that need it should compare the two halves of a sum with [`approx_eq()`]
/// instead.
pub fn approx_eq_zero(x: Float) -> bool {
    approx_eq(x, 0.0)
}

/// Returns whether one number is less than another or approximately equal to
/// it.
pub fn approx_lt_eq(a: Float, b: Float) -> bool {
    a < b || approx_eq(a, b)
}

/// Returns whether one number is less than another by more than the
/// tolerance.
pub fn approx_lt(a: Float, b: Float) -> bool {
    a < b && !approx_eq(a, b)
}

/// Returns whether a sum of terms is approximately zero.
///
/// Positive and negative terms are summed separately and then compared, so
/// that [`REL_TOLERANCE`] scales with the magnitude of the terms rather than
/// with the (near-zero) result.
pub fn approx_sum_eq_zero(terms: impl IntoIterator<Item = Float>) -> bool {
    let (positive, negative) = terms
        .into_iter()
        .fold((0.0, 0.0), |(pos, neg), x| match x > 0.0 {
            true => (pos + x, neg),
            false => (pos, neg - x),
        });
    approx_eq(positive, negative)
}
