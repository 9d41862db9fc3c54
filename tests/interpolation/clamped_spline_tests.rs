use approx::assert_abs_diff_eq;

use nodal::interpolation::errors::InterpolationError;
use nodal::interpolation::spline::{BoundaryCondition, CubicSpline};
use nodal::interpolation::Interpolator;

use crate::common::{approx_eq, assert_vec_close, assert_vec_close_tol, grid, NodalResult};

fn clamped(x: &[f64], y: &[f64], start: f64, end: f64) -> Result<CubicSpline, InterpolationError> {
    CubicSpline::new(x, y, BoundaryCondition::Clamped { start, end })
}

#[test]
fn exact_hits() -> NodalResult {
    // y  = x^3 - 2x + 1
    // y' = 3x^2 - 2
    let x = [0.0, 1.0, 2.0, 3.0];
    let y: Vec<f64> = x.iter().map(|&t| t*t*t - 2.0*t + 1.0).collect();
    let fp0 = 3.0*0.0*0.0 - 2.0;
    let fpn = 3.0*3.0*3.0 - 2.0;

    let s = clamped(&x, &y, fp0, fpn)?;
    assert_vec_close(&s.eval_many(&x)?, &y);
    Ok(())
}

#[test]
fn reproduces_cubic() -> NodalResult {
    // exact end slopes make the cubic itself the unique clamped spline
    let f = |t: f64| t*t*t - 2.0*t + 1.0;
    let x = [0.0, 0.5, 1.7, 3.0];
    let y: Vec<f64> = x.iter().map(|&t| f(t)).collect();

    let s = clamped(&x, &y, -2.0, 25.0)?;
    for q in grid(0.0, 3.0, 31) {
        assert_abs_diff_eq!(s.eval(q)?, f(q), epsilon = 1e-10);
    }
    Ok(())
}

#[test]
fn end_slopes_match() -> NodalResult {
    let x = [0.0, 1.0, 2.5, 4.0];
    let y = [1.0, 0.0, 2.0, -1.0];

    let s = clamped(&x, &y, 0.75, -2.0)?;
    assert_abs_diff_eq!(s.derivative(0.0)?, 0.75, epsilon = 1e-10);
    assert_abs_diff_eq!(s.derivative(4.0)?, -2.0, epsilon = 1e-10);
    assert_eq!(s.boundary(), BoundaryCondition::Clamped { start: 0.75, end: -2.0 });
    Ok(())
}

#[test]
fn constant_function() -> NodalResult {
    let x = [0.0, 0.2, 1.1, 3.7, 5.0];
    let y = [2.5; 5];
    let x_eval = [-0.0, 0.2, 1.0, 2.5, 3.7, 5.0];
    let y_expected = [2.5; 6];

    assert_vec_close(&clamped(&x, &y, 0.0, 0.0)?.eval_many(&x_eval)?, &y_expected);
    Ok(())
}

#[test]
fn linear_function() -> NodalResult {
    // y = 3x - 1, y' = 3
    let x = [-2.0, 0.0, 0.3, 1.7, 4.2];
    let y: Vec<f64> = x.iter().map(|&xi| 3.0*xi - 1.0).collect();
    let x_eval = [-2.0, -1.0, 0.0, 0.3, 1.0, 1.7, 3.0, 4.2];
    let y_expected: Vec<f64> = x_eval.iter().map(|&t| 3.0*t - 1.0).collect();

    assert_vec_close_tol(&clamped(&x, &y, 3.0, 3.0)?.eval_many(&x_eval)?, &y_expected, 1e-11);
    Ok(())
}

#[test]
fn two_points_is_hermite_cubic() -> NodalResult {
    let x = [2.0, 5.0];
    let y = [7.0, 1.0];
    let m = (y[1] - y[0]) / (x[1] - x[0]);

    // secant slopes at both ends collapse the cubic to the chord
    let s = clamped(&x, &y, m, m)?;
    let x_eval = [2.0, 3.0, 4.0, 5.0];
    let y_expected: Vec<f64> = x_eval.iter().map(|&t| y[0] + m*(t - x[0])).collect();
    assert_vec_close(&s.eval_many(&x_eval)?, &y_expected);

    // y = x^3 on [0, 1]
    let s = clamped(&[0.0, 1.0], &[0.0, 1.0], 0.0, 3.0)?;
    assert!(approx_eq(s.eval(0.5)?, 0.125));
    Ok(())
}

#[test]
fn bounds_ok_at_endpoints() -> NodalResult {
    // y = x^2
    let x = [-1.0, 2.0, 6.0];
    let y: Vec<f64> = x.iter().map(|&t| t*t).collect();

    let s = clamped(&x, &y, 2.0 * x[0], 2.0 * x[2])?;
    assert!(approx_eq(s.eval(x[0])?, y[0]));
    assert!(approx_eq(s.eval(x[2])?, y[2]));
    Ok(())
}

#[test]
fn out_of_bounds_low() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 2.0];

    let err = clamped(&x, &y, 1.0, 1.0).unwrap().eval(-0.1).unwrap_err();
    assert!(matches!(err, InterpolationError::OutOfBounds { got, x_min, x_max }
        if got == -0.1 && x_min == 0.0 && x_max == 2.0));
}

#[test]
fn non_finite_slopes_rejected() {
    let err = clamped(&[0.0, 1.0], &[0.0, 1.0], f64::NAN, 1.0).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidBoundary { end, .. } if end == 1.0));
}

/// Independent clamped spline in `c = M / 2` form.
fn clamped_reference_eval(
    x: &[f64],
    y: &[f64],
    x_eval: &[f64],
    fp0: f64,
    fpn: f64
) -> Vec<f64> {
    let n = x.len();
    let h: Vec<f64> = (0..n - 1).map(|i| x[i + 1] - x[i]).collect();

    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut c = vec![0.0; n];
    let mut d = vec![0.0; n];

    b[0] = 2.0 * h[0];
    c[0] = h[0];
    d[0] = 3.0 * ((y[1] - y[0]) / h[0] - fp0);
    for i in 1..n - 1 {
        a[i] = h[i - 1];
        b[i] = 2.0 * (h[i - 1] + h[i]);
        c[i] = h[i];
        d[i] = 3.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
    }
    a[n - 1] = h[n - 2];
    b[n - 1] = 2.0 * h[n - 2];
    d[n - 1] = 3.0 * (fpn - (y[n - 1] - y[n - 2]) / h[n - 2]);

    // thomas inplace
    c[0] /= b[0];
    d[0] /= b[0];
    for i in 1..n {
        let denom = b[i] - a[i] * c[i - 1];
        if i < n - 1 { c[i] /= denom; }
        d[i] = (d[i] - a[i] * d[i - 1]) / denom;
    }
    for i in (0..n - 1).rev() {
        d[i] -= c[i] * d[i + 1];
    }
    let c_full = d;

    let mut out = Vec::with_capacity(x_eval.len());
    for &xq in x_eval {
        let mut lo = 0;
        let mut hi = n - 1;
        while lo + 1 < hi {
            let mid = (lo + hi) / 2;
            if x[mid] <= xq { lo = mid; } else { hi = mid; }
        }
        let bl = (y[lo + 1] - y[lo]) / h[lo] - h[lo] * (2.0 * c_full[lo] + c_full[lo + 1]) / 3.0;
        let dl = (c_full[lo + 1] - c_full[lo]) / (3.0 * h[lo]);
        let dx = xq - x[lo];
        out.push(y[lo] + bl*dx + c_full[lo]*dx*dx + dl*dx*dx*dx);
    }
    out
}

#[test]
fn cross_checks_solver() -> NodalResult {
    let x: Vec<f64> = (0..21).map(|k| (k as f64).powf(1.3)).collect();
    let y: Vec<f64> = x.iter().map(|&t| (t + 1.0).ln() + 0.1 * (0.5*t).sin()).collect();
    let x_eval = grid(x[0], x[20], 51);

    let fp0 = 1.0/(x[0] + 1.0) + 0.1 * 0.5 * (0.5*x[0]).cos();
    let xn  = x[20];
    let fpn = 1.0/(xn + 1.0) + 0.1 * 0.5 * (0.5*xn).cos();

    let vals = clamped(&x, &y, fp0, fpn)?.eval_many(&x_eval)?;
    let ref_vals = clamped_reference_eval(&x, &y, &x_eval, fp0, fpn);
    assert_vec_close_tol(&vals, &ref_vals, 1e-10);
    Ok(())
}
