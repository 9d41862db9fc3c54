//! Linear Interpolation
//!
//! Implements piecewise-[linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation).
//!
//! Each consecutive pair `(x[i], y[i])`, `(x[i+1], y[i+1])` defines
//! a line segment. Evaluation points lying within `[x[i], x[i+1]]`
//! are interpolated linearly between the two end points.
//!
//! Points outside `[x[0], x[n-1]]` are extrapolated along the nearest end
//! segment. This is fixed policy: unlike
//! [`crate::interpolation::spline::cubic::CubicSpline`], a linear model
//! never rejects a finite query.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::validate::check_query;


/// Linear interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LinearCfg::new`], the setters, then [`LinearCfg::build`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LinearCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    pub fn build(&self) -> Result<PiecewiseLinear, InterpolationError> {
        self.common.validate()?;
        Ok(PiecewiseLinear {
            x: self.common.x().to_vec(),
            y: self.common.y().to_vec(),
        })
    }
}
impl_common_cfg!(LinearCfg<'a>);


#[inline]
fn lerp(x0: f64, x1: f64, y0: f64, y1: f64, xq: f64) -> f64 {
    y0 + (y1 - y0) * (xq - x0) / (x1 - x0)
}


/// Piecewise-linear interpolant with end-segment extrapolation.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinear {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PiecewiseLinear {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        LinearCfg::new().set_x(x)?.set_y(y)?.build()
    }
}

impl Interpolator for PiecewiseLinear {
    fn algorithm(&self) -> Algorithm { Algorithm::PiecewiseLinear }

    /// # Behavior
    /// Finds the enclosing interval `[x[i], x[i+1]]` by binary search
    /// (the first or last one when `xq` is out of range) and computes
    ///
    /// ```text
    /// yq = y[i] + (y[i+1] - y[i]) * (xq - x[i]) / (x[i+1] - x[i])
    /// ```
    ///
    /// Exact node hits return `y[i]` unchanged.
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        check_query(xq)?;

        let x = &self.x;
        let y = &self.y;
        let n = x.len();

        match x.binary_search_by(|xi| xi.total_cmp(&xq)) {
            Ok(idx)  => Ok(y[idx]),
            Err(idx) => {
                // x[idx - 1] < xq < x[idx], or past either end
                let i = idx.clamp(1, n - 1) - 1;

                let (x0, x1) = (x[i], x[i + 1]);
                let (y0, y1) = (y[i], y[i + 1]);

                Ok(lerp(x0, x1, y0, y1, xq))
            }
        }
    }

    /// The sample values.
    fn coefficients(&self) -> &[f64] { &self.y }

    fn nodes(&self) -> &[f64] { &self.x }
}
