//! Hermite Interpolation
//!
//! Implements [Hermite interpolation](https://en.wikipedia.org/wiki/Hermite_interpolation)
//! with first derivatives: the unique polynomial of degree `2n - 1` that
//! matches both `y[i]` and `dydx[i]` at every node.
//!
//! Built from the confluent divided-difference table over the doubled
//! nodes `x0, x0, x1, x1, ...` and evaluated with the same nested scheme as
//! [`crate::interpolation::newton::Newton`].

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::divided_differences::{
    confluent_divided_differences,
    horner,
    horner_with_derivative,
    DividedDifferences,
};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::validate::{check_finite, check_query};


/// Hermite interpolation configuration
///
/// # Fields
/// - `common`      : [`CommonCfg`]
/// - `derivatives` : one first derivative per node, required
///
/// # Construction
/// - Use [`HermiteCfg::new`], the setters including
///   [`HermiteCfg::set_derivatives`], then [`HermiteCfg::build`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HermiteCfg<'a> {
    common: CommonCfg<'a>,
    derivatives: &'a [f64],
}
impl<'a> HermiteCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), derivatives: &[] }
    }

    pub fn set_derivatives(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::MissingDerivatives);
        }
        check_finite(v)?;

        let x_len = self.common.x().len();
        if x_len != 0 && v.len() != x_len {
            return Err(InterpolationError::DerivativeLength { expected: x_len, got: v.len() });
        }

        self.derivatives = v;
        Ok(self)
    }

    pub fn derivatives(&self) -> &'a [f64] { self.derivatives }

    pub fn build(&self) -> Result<Hermite, InterpolationError> {
        self.common.validate()?;

        let x = self.common.x();
        let y = self.common.y();
        let d = self.derivatives;
        if d.is_empty() {
            return Err(InterpolationError::MissingDerivatives);
        }
        if d.len() != x.len() {
            return Err(InterpolationError::DerivativeLength { expected: x.len(), got: d.len() });
        }

        let table  = confluent_divided_differences(x, y, d)?;
        let coeffs = table.coefficients();

        Ok(Hermite {
            x: x.to_vec(),
            y: y.to_vec(),
            derivatives: d.to_vec(),
            table,
            coeffs,
        })
    }
}
impl_common_cfg!(HermiteCfg<'a>);


/// Hermite interpolating polynomial.
#[derive(Debug, Clone, PartialEq)]
pub struct Hermite {
    x: Vec<f64>,
    y: Vec<f64>,
    derivatives: Vec<f64>,
    table : DividedDifferences,
    coeffs: Vec<f64>,
}

impl Hermite {
    pub fn new(x: &[f64], y: &[f64], derivatives: &[f64]) -> Result<Self, InterpolationError> {
        HermiteCfg::new()
            .set_x(x)?
            .set_y(y)?
            .set_derivatives(derivatives)?
            .build()
    }

    pub fn values(&self) -> &[f64] { &self.y }

    pub fn derivatives(&self) -> &[f64] { &self.derivatives }

    /// Confluent table over the doubled nodes.
    pub fn table(&self) -> &DividedDifferences { &self.table }

    /// First derivative of the polynomial at `q`.
    pub fn derivative(&self, q: f64) -> Result<f64, InterpolationError> {
        check_query(q)?;
        Ok(horner_with_derivative(&self.coeffs, self.table.nodes(), q).1)
    }
}

impl Interpolator for Hermite {
    fn algorithm(&self) -> Algorithm { Algorithm::Hermite }

    fn eval(&self, q: f64) -> Result<f64, InterpolationError> {
        check_query(q)?;
        Ok(horner(&self.coeffs, self.table.nodes(), q))
    }

    /// Leading diagonal of the confluent table, `2n` entries.
    fn coefficients(&self) -> &[f64] { &self.coeffs }

    fn nodes(&self) -> &[f64] { &self.x }
}
