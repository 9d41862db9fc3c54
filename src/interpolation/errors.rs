//! Interpolation error types.
//!
//! ┌ malformed input       : empty, unequal length, too few points,
//! │                         non-finite or non-increasing `x`
//! ├ missing companion data: Hermite derivatives absent or mis-sized
//! ├ unsupported method    : unrecognized algorithm name
//! └ out-of-domain query   : spline evaluated outside `[x[0], x[n-1]]`

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing: x[{idx}]={got} after {prev}")]
    NonIncreasingX { idx: usize, prev: f64, got: f64 },

    #[error("hermite interpolation requires derivative values")]
    MissingDerivatives,

    #[error("derivative length mismatch: expected {expected}, got {got}")]
    DerivativeLength { expected: usize, got: usize },

    #[error("unsupported interpolation algorithm `{got}`")]
    UnsupportedAlgorithm { got: String },

    #[error("evaluation point {got} out of bounds in [{x_min}, {x_max}]")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },

    #[error("non-finite evaluation point {got}")]
    NonFiniteQuery { got: f64 },

    #[error("invalid clamped boundary slopes: start={start}, end={end}")]
    InvalidBoundary { start: f64, end: f64 },

    #[error("invalid min spacing {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("singular tridiagonal system: zero pivot at row {row}")]
    SingularSystem { row: usize },
}
