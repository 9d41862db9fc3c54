//! Construction dispatcher.
//!
//! [`create`] maps an [`Algorithm`] plus sample data onto one concrete
//! model and wraps it in an [`Interpolant`], the common handle. The handle
//! owns every derived table and coefficient, so the input slices may be
//! dropped as soon as `create` returns.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::hermite::Hermite;
use crate::interpolation::lagrange::Lagrange;
use crate::interpolation::linear::PiecewiseLinear;
use crate::interpolation::newton::Newton;
use crate::interpolation::spline::{BoundaryCondition, CubicSpline};
use crate::interpolation::traits::Interpolator;
use crate::interpolation::validate::validate;


/// Any built interpolation model.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolant {
    Lagrange(Lagrange),
    Newton(Newton),
    Hermite(Hermite),
    PiecewiseLinear(PiecewiseLinear),
    CubicSpline(CubicSpline),
}

macro_rules! delegate {
    ($self:ident, $m:ident => $call:expr) => {
        match $self {
            Interpolant::Lagrange($m)        => $call,
            Interpolant::Newton($m)          => $call,
            Interpolant::Hermite($m)         => $call,
            Interpolant::PiecewiseLinear($m) => $call,
            Interpolant::CubicSpline($m)     => $call,
        }
    };
}

impl Interpolator for Interpolant {
    fn algorithm(&self) -> Algorithm { delegate!(self, m => m.algorithm()) }

    fn eval(&self, x: f64) -> Result<f64, InterpolationError> { delegate!(self, m => m.eval(x)) }

    fn coefficients(&self) -> &[f64] { delegate!(self, m => m.coefficients()) }

    fn nodes(&self) -> &[f64] { delegate!(self, m => m.nodes()) }
}

impl Interpolant {
    pub fn as_spline(&self) -> Option<&CubicSpline> {
        match self {
            Interpolant::CubicSpline(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_newton(&self) -> Option<&Newton> {
        match self {
            Interpolant::Newton(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_hermite(&self) -> Option<&Hermite> {
        match self {
            Interpolant::Hermite(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Lagrange> for Interpolant {
    fn from(m: Lagrange) -> Self { Interpolant::Lagrange(m) }
}
impl From<Newton> for Interpolant {
    fn from(m: Newton) -> Self { Interpolant::Newton(m) }
}
impl From<Hermite> for Interpolant {
    fn from(m: Hermite) -> Self { Interpolant::Hermite(m) }
}
impl From<PiecewiseLinear> for Interpolant {
    fn from(m: PiecewiseLinear) -> Self { Interpolant::PiecewiseLinear(m) }
}
impl From<CubicSpline> for Interpolant {
    fn from(m: CubicSpline) -> Self { Interpolant::CubicSpline(m) }
}


/// Builds the model selected by `algorithm` from `(x, y)`.
///
/// `derivatives` is read only for [`Algorithm::Hermite`] and ignored by
/// every other method. [`Algorithm::CubicSpline`] uses
/// [`BoundaryCondition::Natural`]; see [`create_spline`] for the others.
///
/// # Errors
/// - any error of [`validate`], checked first
/// - [`InterpolationError::MissingDerivatives`] /
///   [`InterpolationError::DerivativeLength`] for Hermite
pub fn create(
    algorithm  : Algorithm,
    x          : &[f64],
    y          : &[f64],
    derivatives: &[f64],
) -> Result<Interpolant, InterpolationError> {
    validate(x, y)?;

    let model: Interpolant = match algorithm {
        Algorithm::Lagrange        => Lagrange::new(x, y)?.into(),
        Algorithm::Newton          => Newton::new(x, y)?.into(),
        Algorithm::Hermite         => {
            if derivatives.is_empty() {
                return Err(InterpolationError::MissingDerivatives);
            }
            if derivatives.len() != x.len() {
                return Err(InterpolationError::DerivativeLength {
                    expected: x.len(),
                    got: derivatives.len(),
                });
            }
            Hermite::new(x, y, derivatives)?.into()
        }
        Algorithm::PiecewiseLinear => PiecewiseLinear::new(x, y)?.into(),
        Algorithm::CubicSpline     => CubicSpline::new(x, y, BoundaryCondition::Natural)?.into(),
    };

    Ok(model)
}


/// Builds a cubic spline with an explicit boundary condition.
pub fn create_spline(
    x       : &[f64],
    y       : &[f64],
    boundary: BoundaryCondition,
) -> Result<Interpolant, InterpolationError> {
    validate(x, y)?;
    Ok(CubicSpline::new(x, y, boundary)?.into())
}


/// [`create`] with the method given by name, e.g. `"newton"` or
/// `"piecewise-linear"`.
///
/// # Errors
/// - [`InterpolationError::UnsupportedAlgorithm`] for an unknown name
pub fn create_by_name(
    name       : &str,
    x          : &[f64],
    y          : &[f64],
    derivatives: &[f64],
) -> Result<Interpolant, InterpolationError> {
    let algorithm: Algorithm = name.parse()?;
    create(algorithm, x, y, derivatives)
}
