//! Input validation shared by every interpolation method.
//!
//! [`validate`] enforces the sample-set rules once, at construction time:
//! - `x` and `y` non-empty and of equal length
//! - at least two points
//! - every value finite
//! - `x` strictly increasing
//!
//! Built models never re-validate on evaluation; only the query point
//! itself is checked there (see [`check_query`]).

use crate::interpolation::errors::InterpolationError;

/// Checks that `(x, y)` is a well-formed sample set.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] if either slice is empty
/// - [`InterpolationError::UnequalLength`] if the lengths differ
/// - [`InterpolationError::InsufficientPoints`] if fewer than 2 points
/// - [`InterpolationError::NonFiniteVec`] if any value is NaN or infinite
/// - [`InterpolationError::NonIncreasingX`] if `x[i] <= x[i-1]` for some `i`
pub fn validate(x: &[f64], y: &[f64]) -> Result<(), InterpolationError> {
    if x.is_empty() || y.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < 2 {
        return Err(InterpolationError::InsufficientPoints { got: x.len() });
    }
    check_finite(x)?;
    check_finite(y)?;
    check_increasing(x)
}

/// `true` when [`validate`] accepts the sample set.
#[inline]
pub fn is_valid(x: &[f64], y: &[f64]) -> bool {
    validate(x, y).is_ok()
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

pub(crate) fn check_finite(xs: &[f64]) -> Result<(), InterpolationError> {
    match non_finite_idx(xs) {
        Some(idx) => Err(InterpolationError::NonFiniteVec { idx }),
        None      => Ok(()),
    }
}

pub(crate) fn check_increasing(x: &[f64]) -> Result<(), InterpolationError> {
    for i in 1..x.len() {
        if x[i] <= x[i - 1] {
            return Err(InterpolationError::NonIncreasingX { idx: i, prev: x[i - 1], got: x[i] });
        }
    }
    Ok(())
}

/// Rejects adjacent nodes closer than `tol`.
pub(crate) fn check_min_spacing(x: &[f64], tol: f64) -> Result<(), InterpolationError> {
    for w in x.windows(2) {
        if (w[1] - w[0]).abs() < tol {
            return Err(InterpolationError::DuplicateX { x1: w[0], x2: w[1] });
        }
    }
    Ok(())
}

#[inline]
pub(crate) fn check_query(q: f64) -> Result<(), InterpolationError> {
    if q.is_finite() { Ok(()) } else { Err(InterpolationError::NonFiniteQuery { got: q }) }
}
