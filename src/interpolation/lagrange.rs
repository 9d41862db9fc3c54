//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in the
//! [Lagrange basis](https://en.wikipedia.org/wiki/Lagrange_polynomial).
//!
//! ```text
//! P(q) = Σ_i y[i] * Π_{j≠i} (q - x[j]) / (x[i] - x[j])
//! ```
//!
//! Nothing is precomputed; every query costs O(n²). Strictly increasing
//! nodes guarantee no basis denominator is zero.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::validate::check_query;


/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LagrangeCfg::new`], the setters, then [`LagrangeCfg::build`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    pub fn build(&self) -> Result<Lagrange, InterpolationError> {
        self.common.validate()?;
        Ok(Lagrange {
            x: self.common.x().to_vec(),
            y: self.common.y().to_vec(),
        })
    }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Global interpolating polynomial in Lagrange form.
#[derive(Debug, Clone, PartialEq)]
pub struct Lagrange {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Lagrange {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        LagrangeCfg::new().set_x(x)?.set_y(y)?.build()
    }

    /// `L_i(q)`, the `i`-th basis polynomial at `q`.
    #[inline]
    fn basis(&self, i: usize, q: f64) -> f64 {
        let xi = self.x[i];
        self.x
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(1.0, |acc, (_, &xj)| acc * (q - xj) / (xi - xj))
    }
}

impl Interpolator for Lagrange {
    fn algorithm(&self) -> Algorithm { Algorithm::Lagrange }

    fn eval(&self, q: f64) -> Result<f64, InterpolationError> {
        check_query(q)?;
        Ok((0..self.x.len()).map(|i| self.y[i] * self.basis(i, q)).sum())
    }

    /// The sample values; the basis already encodes `x`.
    fn coefficients(&self) -> &[f64] { &self.y }

    fn nodes(&self) -> &[f64] { &self.x }
}
