//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods
//! and selects what [`crate::interpolation::dispatch::create`] builds.

use std::str::FromStr;
use crate::interpolation::errors::InterpolationError;

/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`]        global polynomial, Lagrange basis
/// - [`Algorithm::Newton`]          global polynomial, divided differences
/// - [`Algorithm::Hermite`]         values + first derivatives
/// - [`Algorithm::PiecewiseLinear`] straight segments, linear extrapolation
/// - [`Algorithm::CubicSpline`]     C² piecewise cubic, no extrapolation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Lagrange,
    Newton,
    Hermite,
    PiecewiseLinear,
    CubicSpline,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Lagrange,
        Algorithm::Newton,
        Algorithm::Hermite,
        Algorithm::PiecewiseLinear,
        Algorithm::CubicSpline,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange        => "lagrange",
            Algorithm::Newton          => "newton",
            Algorithm::Hermite         => "hermite",
            Algorithm::PiecewiseLinear => "piecewise linear",
            Algorithm::CubicSpline     => "cubic spline",
        }
    }

    /// Whether the model needs one derivative per node.
    pub const fn requires_derivatives(self) -> bool {
        matches!(self, Algorithm::Hermite)
    }

    /// Whether queries outside the sample range are rejected.
    pub const fn is_local(self) -> bool {
        matches!(self, Algorithm::CubicSpline)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

impl FromStr for Algorithm {
    type Err = InterpolationError;

    /// Parses `"newton"`, `"Piecewise-Linear"`, `"cubic_spline"`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "lagrange"                      => Ok(Algorithm::Lagrange),
            "newton" | "divideddifferences" => Ok(Algorithm::Newton),
            "hermite"                       => Ok(Algorithm::Hermite),
            "piecewiselinear" | "linear"    => Ok(Algorithm::PiecewiseLinear),
            "cubicspline" | "spline"        => Ok(Algorithm::CubicSpline),
            _ => Err(InterpolationError::UnsupportedAlgorithm { got: s.to_string() }),
        }
    }
}
