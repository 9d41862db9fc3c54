//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients are the leading diagonal of the divided-difference table
//! and are evaluated at query points using Horner’s scheme. The model is
//! the same polynomial as [`crate::interpolation::lagrange::Lagrange`] but
//! evaluates in O(n) and can take one more node in O(n)
//! ([`Newton::with_point`]).

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::divided_differences::{divided_differences, horner, DividedDifferences};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::validate::check_query;


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`], the setters, then [`NewtonCfg::build`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    pub fn build(&self) -> Result<Newton, InterpolationError> {
        self.common.validate()?;
        let table = divided_differences(self.common.x(), self.common.y())?;
        Ok(Newton::from_table(table))
    }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Global interpolating polynomial in Newton form.
///
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`
#[derive(Debug, Clone, PartialEq)]
pub struct Newton {
    table : DividedDifferences,
    coeffs: Vec<f64>,
}

impl Newton {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        NewtonCfg::new().set_x(x)?.set_y(y)?.build()
    }

    fn from_table(table: DividedDifferences) -> Self {
        let coeffs = table.coefficients();
        Self { table, coeffs }
    }

    /// The full divided-difference table.
    pub fn table(&self) -> &DividedDifferences { &self.table }

    /// Returns a model with `(x, y)` appended as a new last node.
    ///
    /// Only the new table entries are computed; `self` is untouched.
    ///
    /// # Errors
    /// - [`InterpolationError::NonFiniteVec`] if `x` or `y` is not finite
    /// - [`InterpolationError::NonIncreasingX`] if `x` does not exceed the
    ///   current last node
    pub fn with_point(&self, x: f64, y: f64) -> Result<Self, InterpolationError> {
        let nodes = self.table.nodes();
        let n     = nodes.len();
        let last  = nodes[n - 1];
        if x.is_finite() && x <= last {
            return Err(InterpolationError::NonIncreasingX { idx: n, prev: last, got: x });
        }

        let mut table = self.table.clone();
        table.extend(x, y)?;
        Ok(Self::from_table(table))
    }
}

impl Interpolator for Newton {
    fn algorithm(&self) -> Algorithm { Algorithm::Newton }

    fn eval(&self, q: f64) -> Result<f64, InterpolationError> {
        check_query(q)?;
        Ok(horner(&self.coeffs, self.table.nodes(), q))
    }

    /// Newton coefficients, `f[x0], f[x0, x1], ...`
    fn coefficients(&self) -> &[f64] { &self.coeffs }

    fn nodes(&self) -> &[f64] { self.table.nodes() }
}
