//! Cubic Spline Interpolation
//!
//! Implements [cubic spline interpolation](https://en.wikipedia.org/wiki/Spline_interpolation):
//! a piecewise cubic `S` with continuous first and second derivatives that
//! passes through every sample.
//!
//! The unknowns are the second derivatives `M[i] = S''(x[i])`. Interior
//! nodes give
//!
//! ```text
//! h[i-1] M[i-1] + 2 (h[i-1] + h[i]) M[i] + h[i] M[i+1] = 6 (δ[i] - δ[i-1])
//! ```
//!
//! with `h[i] = x[i+1] - x[i]` and `δ[i] = (y[i+1] - y[i]) / h[i]`; the
//! [`BoundaryCondition`] supplies the remaining two rows. The system is
//! solved with the Thomas algorithm in O(n).
//!
//! A spline is a local model: queries outside `[x[0], x[n-1]]` fail with
//! [`InterpolationError::OutOfBounds`].

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::helpers::{deltas, find_interval, spacings};
use crate::interpolation::spline::boundary::BoundaryCondition;
use crate::interpolation::spline::tridiagonal;
use crate::interpolation::traits::Interpolator;
use crate::interpolation::validate::check_query;


/// Cubic spline configuration
///
/// # Fields
/// - `common`   : [`CommonCfg`]
/// - `boundary` : [`BoundaryCondition`], natural by default
#[derive(Debug, Copy, Clone, Default)]
pub struct CubicSplineCfg<'a> {
    common: CommonCfg<'a>,
    boundary: BoundaryCondition,
}
impl<'a> CubicSplineCfg<'a> {
    pub fn new(boundary: BoundaryCondition) -> Self {
        Self { common: CommonCfg::new(), boundary }
    }

    pub fn with_boundary(mut self, v: BoundaryCondition) -> Self { self.boundary = v; self }

    pub fn boundary(&self) -> BoundaryCondition { self.boundary }

    pub fn build(&self) -> Result<CubicSpline, InterpolationError> {
        self.common.validate()?;
        self.boundary.validate()?;

        let x = self.common.x();
        let y = self.common.y();

        let h = spacings(x);
        let d = deltas(y, &h);
        let m = second_derivatives(&h, &d, self.boundary)?;

        let (bcoef, ccoef, dcoef) = coeffs(&h, &d, &m);

        Ok(CubicSpline {
            x: x.to_vec(),
            y: y.to_vec(),
            m,
            bcoef,
            ccoef,
            dcoef,
            boundary: self.boundary,
        })
    }
}
impl_common_cfg!(CubicSplineCfg<'a>);


/// Solves for `M[i] = S''(x[i])` under the given boundary condition.
fn second_derivatives(
    h: &[f64],
    d: &[f64],
    boundary: BoundaryCondition,
) -> Result<Vec<f64>, InterpolationError> {
    let n = h.len() + 1;

    match boundary {
        BoundaryCondition::Natural                => solve_natural(n, h, d),
        BoundaryCondition::Clamped { start, end } => solve_clamped(n, h, d, start, end),
        BoundaryCondition::NotAKnot               => solve_not_a_knot(n, h, d),
    }
}


/// nxn system with the interior rows filled in; boundary rows left zero.
fn interior_system(n: usize, h: &[f64], d: &[f64]) -> [Vec<f64>; 4] {
    let mut a_sub  = vec![0.0; n];
    let mut b_diag = vec![0.0; n];
    let mut c_sup  = vec![0.0; n];
    let mut rhs    = vec![0.0; n];

    for i in 1..n - 1 {
        a_sub[i]  = h[i - 1];
        b_diag[i] = 2.0 * (h[i - 1] + h[i]);
        c_sup[i]  = h[i];
        rhs[i]    = 6.0 * (d[i] - d[i - 1]);
    }

    [a_sub, b_diag, c_sup, rhs]
}


fn solve_natural(n: usize, h: &[f64], d: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    let [a_sub, mut b_diag, c_sup, rhs] = interior_system(n, h, d);

    // M[0] = M[n-1] = 0
    b_diag[0]     = 1.0;
    b_diag[n - 1] = 1.0;

    tridiagonal::solve(&a_sub, &b_diag, &c_sup, &rhs)
}


fn solve_clamped(
    n: usize,
    h: &[f64],
    d: &[f64],
    fp0: f64,
    fpn: f64,
) -> Result<Vec<f64>, InterpolationError> {
    let [mut a_sub, mut b_diag, mut c_sup, mut rhs] = interior_system(n, h, d);

    // i = 0:
    // 2 h0 M0 + h0 M1 = 6[(y1 - y0)/h0 - fp0]
    b_diag[0] = 2.0 * h[0];
    c_sup[0]  = h[0];
    rhs[0]    = 6.0 * (d[0] - fp0);

    // i = n-1:
    // h_{n-2} M_{n-2} + 2 h_{n-2} M_{n-1} = 6[fpn - (y_{n-1} - y_{n-2})/h_{n-2}]
    let hl = h[n - 2];
    a_sub[n - 1]  = hl;
    b_diag[n - 1] = 2.0 * hl;
    rhs[n - 1]    = 6.0 * (fpn - d[n - 2]);

    tridiagonal::solve(&a_sub, &b_diag, &c_sup, &rhs)
}


/// `S'''` continuous across `x[1]` and `x[n-2]`:
///
/// ```text
/// h1 M0 = (h0 + h1) M1 - h0 M2
/// a M_{n-1} = (a + b) M_{n-2} - b M_{n-3}      a = h_{n-3}, b = h_{n-2}
/// ```
///
/// `M0` and `M_{n-1}` are substituted into the first and last interior
/// rows, leaving a tridiagonal system in `M1..M_{n-2}`.
fn solve_not_a_knot(n: usize, h: &[f64], d: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    match n {
        // straight line
        2 => return Ok(vec![0.0; 2]),
        // both conditions sit on the single interior knot; the spline is
        // the parabola through the three points
        3 => {
            let m = 2.0 * (d[1] - d[0]) / (h[0] + h[1]);
            return Ok(vec![m; 3]);
        }
        _ => {}
    }

    let [a_sub, b_diag, c_sup, rhs] = interior_system(n, h, d);

    // reduced system over M1..M_{n-2}
    let mut a_sub  = a_sub[1..n - 1].to_vec();
    let mut b_diag = b_diag[1..n - 1].to_vec();
    let mut c_sup  = c_sup[1..n - 1].to_vec();
    let rhs        = rhs[1..n - 1].to_vec();
    let k = n - 2;

    let (h0, h1) = (h[0], h[1]);
    b_diag[0] = (h0 + h1) * (h0 + 2.0 * h1) / h1;
    c_sup[0]  = (h1 * h1 - h0 * h0) / h1;

    let (a, b) = (h[n - 3], h[n - 2]);
    a_sub[k - 1]  = (a * a - b * b) / a;
    b_diag[k - 1] = (a + b) * (2.0 * a + b) / a;

    let inner = tridiagonal::solve(&a_sub, &b_diag, &c_sup, &rhs)?;

    let mut m = Vec::with_capacity(n);
    m.push(((h0 + h1) * inner[0] - h0 * inner[1]) / h1);
    m.extend_from_slice(&inner);
    m.push(((a + b) * inner[k - 1] - b * inner[k - 2]) / a);

    Ok(m)
}


/// Per-segment coefficients so that on `[x[i], x[i+1]]`
/// `S(x) = y[i] + b[i] t + c[i] t² + d[i] t³`, `t = x - x[i]`.
fn coeffs(
    h: &[f64],
    delta: &[f64],
    m: &[f64],
) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let segments = h.len();

    let mut bcoef = Vec::with_capacity(segments);
    let mut ccoef = Vec::with_capacity(segments);
    let mut dcoef = Vec::with_capacity(segments);

    for i in 0..segments {
        bcoef.push(delta[i] - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0);
        ccoef.push(m[i] / 2.0);
        dcoef.push((m[i + 1] - m[i]) / (6.0 * h[i]));
    }

    (bcoef, ccoef, dcoef)
}


/// Cubic spline interpolant.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    m: Vec<f64>,
    bcoef: Vec<f64>,
    ccoef: Vec<f64>,
    dcoef: Vec<f64>,
    boundary: BoundaryCondition,
}

impl CubicSpline {
    pub fn new(x: &[f64], y: &[f64], boundary: BoundaryCondition) -> Result<Self, InterpolationError> {
        CubicSplineCfg::new(boundary).set_x(x)?.set_y(y)?.build()
    }

    pub fn boundary(&self) -> BoundaryCondition { self.boundary }

    /// Second derivative at each node.
    pub fn second_derivatives(&self) -> &[f64] { &self.m }

    /// `S'(q)`
    pub fn derivative(&self, q: f64) -> Result<f64, InterpolationError> {
        let (lo, dx) = self.locate(q)?;
        Ok(self.bcoef[lo] + 2.0 * self.ccoef[lo] * dx + 3.0 * self.dcoef[lo] * dx * dx)
    }

    /// `S''(q)`
    pub fn second_derivative(&self, q: f64) -> Result<f64, InterpolationError> {
        let (lo, dx) = self.locate(q)?;
        Ok(2.0 * self.ccoef[lo] + 6.0 * self.dcoef[lo] * dx)
    }

    /// Segment index and offset into it; rejects out-of-range queries.
    #[inline]
    fn locate(&self, q: f64) -> Result<(usize, f64), InterpolationError> {
        check_query(q)?;

        let x = &self.x;
        let x_min = x[0];
        let x_max = x[x.len() - 1];
        if q < x_min || q > x_max {
            return Err(InterpolationError::OutOfBounds { got: q, x_min, x_max });
        }

        let lo = find_interval(x, q);
        Ok((lo, q - x[lo]))
    }
}

impl Interpolator for CubicSpline {
    fn algorithm(&self) -> Algorithm { Algorithm::CubicSpline }

    fn eval(&self, q: f64) -> Result<f64, InterpolationError> {
        let (lo, dx) = self.locate(q)?;
        Ok(self.y[lo]
            + self.bcoef[lo] * dx
            + self.ccoef[lo] * dx * dx
            + self.dcoef[lo] * dx * dx * dx)
    }

    /// Second derivatives `M[i]` at the nodes.
    fn coefficients(&self) -> &[f64] { &self.m }

    fn nodes(&self) -> &[f64] { &self.x }
}
