//! Spline boundary conditions.
//!
//! A cubic spline through `n` points has `n` unknown second derivatives
//! but only `n - 2` continuity equations. [`BoundaryCondition`] selects the
//! two extra equations that close the system.

use crate::interpolation::errors::InterpolationError;

/// End conditions for [`crate::interpolation::spline::cubic::CubicSpline`].
/// - [`BoundaryCondition::Natural`]  `S''(x0) = S''(xn) = 0`
/// - [`BoundaryCondition::Clamped`]  `S'(x0) = start`, `S'(xn) = end`
/// - [`BoundaryCondition::NotAKnot`] `S'''` continuous at `x1` and `x_{n-2}`
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum BoundaryCondition {
    #[default]
    Natural,
    Clamped { start: f64, end: f64 },
    NotAKnot,
}

impl BoundaryCondition {
    pub const fn name(self) -> &'static str {
        match self {
            BoundaryCondition::Natural        => "natural",
            BoundaryCondition::Clamped { .. } => "clamped",
            BoundaryCondition::NotAKnot       => "not-a-knot",
        }
    }

    pub(crate) fn validate(self) -> Result<(), InterpolationError> {
        match self {
            BoundaryCondition::Clamped { start, end } if !start.is_finite() || !end.is_finite() => {
                Err(InterpolationError::InvalidBoundary { start, end })
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
