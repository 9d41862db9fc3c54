//! Divided-Difference Tables
//!
//! Builds the triangular table of
//! [divided differences](https://en.wikipedia.org/wiki/Divided_differences)
//! behind the Newton form of the interpolating polynomial.
//!
//! ```text
//! order 0 : f[x_i]              = y_i
//! order k : f[x_i, ..., x_{i+k}] = (f[x_{i+1}..x_{i+k}] - f[x_i..x_{i+k-1}]) / (x_{i+k} - x_i)
//! ```
//!
//! Row `k` of the table holds the `n - k` order-`k` differences. The first
//! entry of every row is a Newton coefficient for the expansion about the
//! leading node.
//!
//! [`confluent_divided_differences`] builds the Hermite variant over doubled
//! nodes, where each `f[x_i, x_i]` is the supplied derivative.
//!
//! No reordering is done; close nodes amplify rounding, so callers who need
//! robustness should order points by proximity to the region of interest.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::validate::check_finite;


/// Divided-difference table indexed by `(order, start index)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferences {
    nodes: Vec<f64>,
    rows : Vec<Vec<f64>>,
}

impl DividedDifferences {
    /// Number of (possibly repeated) nodes in the table.
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Always `false` for a built table.
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Highest order present, `len() - 1`.
    pub fn max_order(&self) -> usize { self.rows.len() - 1 }

    /// Abscissas the table was built over, in construction order.
    pub fn nodes(&self) -> &[f64] { &self.nodes }

    /// All rows, row `k` holding the order-`k` differences.
    pub fn rows(&self) -> &[Vec<f64>] { &self.rows }

    /// Order-`k` row, `None` past [`DividedDifferences::max_order`].
    pub fn order(&self, k: usize) -> Option<&[f64]> {
        self.rows.get(k).map(Vec::as_slice)
    }

    /// `f[x_i, ..., x_{i+k}]`
    pub fn get(&self, k: usize, i: usize) -> Option<f64> {
        self.rows.get(k).and_then(|row| row.get(i)).copied()
    }

    /// Leading diagonal `f[x_0], f[x_0, x_1], ...`; the Newton coefficients.
    pub fn coefficients(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row[0]).collect()
    }

    /// Evaluates the Newton polynomial encoded by the table at `q`.
    pub fn eval(&self, q: f64) -> f64 {
        horner(&self.coefficients(), &self.nodes, q)
    }

    /// Appends one node, adding a single entry to every row and a new
    /// top-order row. O(n).
    ///
    /// # Errors
    /// - [`InterpolationError::NonFiniteVec`] if `x` or `y` is not finite
    /// - [`InterpolationError::DuplicateX`] if `x` is already a node
    pub fn extend(&mut self, x: f64, y: f64) -> Result<(), InterpolationError> {
        let n = self.nodes.len();
        if !x.is_finite() || !y.is_finite() {
            return Err(InterpolationError::NonFiniteVec { idx: n });
        }
        if let Some(&dup) = self.nodes.iter().find(|&&xi| xi == x) {
            return Err(InterpolationError::DuplicateX { x1: dup, x2: x });
        }

        // new entry of row k sits at index n - k and pairs nodes n - k .. n
        let mut entry = y;
        self.rows[0].push(entry);
        for k in 1..=n {
            let prev = self.rows[k - 1][n - k];
            entry = (entry - prev) / (x - self.nodes[n - k]);
            match self.rows.get_mut(k) {
                Some(row) => row.push(entry),
                None      => self.rows.push(vec![entry]),
            }
        }
        self.nodes.push(x);

        Ok(())
    }
}


/// Computes the divided-difference table of `(x, y)`.
///
/// `x` need not be sorted, but every node must be distinct.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] if either slice is empty
/// - [`InterpolationError::UnequalLength`] if the lengths differ
/// - [`InterpolationError::NonFiniteVec`] if any value is not finite
/// - [`InterpolationError::DuplicateX`] if two nodes coincide
pub fn divided_differences(x: &[f64], y: &[f64]) -> Result<DividedDifferences, InterpolationError> {
    check_pairs(x, y)?;

    let mut rows = vec![y.to_vec()];
    fill_higher_orders(x, &mut rows)?;

    Ok(DividedDifferences { nodes: x.to_vec(), rows })
}


/// Computes the confluent (Hermite) table over the doubled nodes
/// `x_0, x_0, x_1, x_1, ...`.
///
/// Each equal-node pair takes its first-order entry from `dydx` instead of
/// a difference quotient, so the resulting polynomial matches both `y` and
/// `dydx` at every node.
///
/// # Errors
/// As [`divided_differences`], plus
/// - [`InterpolationError::MissingDerivatives`] if `dydx` is empty
/// - [`InterpolationError::DerivativeLength`] if `dydx.len() != x.len()`
pub fn confluent_divided_differences(
    x   : &[f64],
    y   : &[f64],
    dydx: &[f64],
) -> Result<DividedDifferences, InterpolationError> {
    check_pairs(x, y)?;
    if dydx.is_empty() {
        return Err(InterpolationError::MissingDerivatives);
    }
    if dydx.len() != x.len() {
        return Err(InterpolationError::DerivativeLength { expected: x.len(), got: dydx.len() });
    }
    check_finite(dydx)?;

    let z   : Vec<f64> = x.iter().flat_map(|&xi| [xi, xi]).collect();
    let row0: Vec<f64> = y.iter().flat_map(|&yi| [yi, yi]).collect();

    let m = z.len();
    let mut row1 = Vec::with_capacity(m - 1);
    for j in 0..m - 1 {
        if j % 2 == 0 {
            // f[x_i, x_i] = f'(x_i)
            row1.push(dydx[j / 2]);
        } else {
            let dz = z[j + 1] - z[j];
            if dz == 0.0 {
                return Err(InterpolationError::DuplicateX { x1: z[j], x2: z[j + 1] });
            }
            row1.push((row0[j + 1] - row0[j]) / dz);
        }
    }

    let mut rows = vec![row0, row1];
    fill_higher_orders(&z, &mut rows)?;

    Ok(DividedDifferences { nodes: z, rows })
}


fn check_pairs(x: &[f64], y: &[f64]) -> Result<(), InterpolationError> {
    if x.is_empty() || y.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
    }
    check_finite(x)?;
    check_finite(y)
}


/// Fills rows `rows.len()..z.len()` from the rows already present.
fn fill_higher_orders(z: &[f64], rows: &mut Vec<Vec<f64>>) -> Result<(), InterpolationError> {
    let n = z.len();

    for k in rows.len()..n {
        let prev = &rows[k - 1];
        let mut row = Vec::with_capacity(n - k);
        for i in 0..n - k {
            let dz = z[i + k] - z[i];
            if dz == 0.0 {
                return Err(InterpolationError::DuplicateX { x1: z[i], x2: z[i + k] });
            }
            row.push((prev[i + 1] - prev[i]) / dz);
        }
        rows.push(row);
    }

    Ok(())
}


/// Nested evaluation of the Newton form
///
/// ```text
/// P(q) = c[0] + (q - z[0]) * [ c[1] + (q - z[1]) * [ ... c[n-1] ... ] ]
/// ```
#[inline]
pub(crate) fn horner(coeffs: &[f64], z: &[f64], q: f64) -> f64 {
    let n = coeffs.len();

    let mut p = coeffs[n - 1];
    for j in (0..n - 1).rev() {
        p = coeffs[j] + (q - z[j]) * p;
    }

    p
}


/// Nested evaluation of the Newton form and its first derivative.
#[inline]
pub(crate) fn horner_with_derivative(coeffs: &[f64], z: &[f64], q: f64) -> (f64, f64) {
    let n = coeffs.len();

    let mut p  = coeffs[n - 1];
    let mut dp = 0.0;
    for j in (0..n - 1).rev() {
        dp = p + (q - z[j]) * dp;
        p  = coeffs[j] + (q - z[j]) * p;
    }

    (p, dp)
}
