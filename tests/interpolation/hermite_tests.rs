use approx::assert_abs_diff_eq;

use nodal::interpolation::errors::InterpolationError;
use nodal::interpolation::hermite::{Hermite, HermiteCfg};
use nodal::interpolation::Interpolator;

use crate::common::{assert_vec_close, NodalResult};

const EPS: f64 = 1e-6;

fn central_difference(model: &Hermite, x: f64) -> Result<f64, InterpolationError> {
    Ok((model.eval(x + EPS)? - model.eval(x - EPS)?) / (2.0 * EPS))
}

#[test]
fn matches_values_and_slopes() -> NodalResult {
    let x  = [0.0, 0.7, 1.5, 2.0];
    let y  = [1.0, -0.5, 2.0, 0.0];
    let dy = [0.0, 3.0, -1.0, 0.5];

    let model = Hermite::new(&x, &y, &dy)?;
    assert_vec_close(&model.eval_many(&x)?, &y);

    for (i, &xi) in x.iter().enumerate() {
        assert_abs_diff_eq!(central_difference(&model, xi)?, dy[i], epsilon = 1e-5);
        assert_abs_diff_eq!(model.derivative(xi)?, dy[i], epsilon = 1e-10);
    }
    Ok(())
}

#[test]
fn reproduces_cubic_from_two_nodes() -> NodalResult {
    // two nodes with slopes determine a cubic uniquely
    let f  = |t: f64| t * t * t - t;
    let df = |t: f64| 3.0 * t * t - 1.0;
    let x  = [-1.0, 2.0];
    let y: Vec<f64>  = x.iter().map(|&t| f(t)).collect();
    let dy: Vec<f64> = x.iter().map(|&t| df(t)).collect();

    let model = HermiteCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_derivatives(&dy)?
        .build()?;

    for q in [-1.0, -0.3, 0.0, 0.9, 2.0, 3.0] {
        assert_abs_diff_eq!(model.eval(q)?, f(q), epsilon = 1e-10);
    }
    Ok(())
}

#[test]
fn coefficients_cover_doubled_nodes() -> NodalResult {
    let model = Hermite::new(&[0.0, 1.0], &[0.0, 1.0], &[0.0, 2.0])?;
    assert_eq!(model.coefficients().len(), 4);
    assert_vec_close(model.coefficients(), &[0.0, 0.0, 1.0, 0.0]);
    assert_eq!(model.nodes(), &[0.0, 1.0]);
    assert_eq!(model.table().nodes(), &[0.0, 0.0, 1.0, 1.0]);
    assert_eq!(model.derivatives(), &[0.0, 2.0]);
    Ok(())
}

#[test]
fn missing_derivatives() {
    let err = HermiteCfg::new()
        .set_x(&[0.0, 1.0]).unwrap()
        .set_y(&[0.0, 1.0]).unwrap()
        .build()
        .unwrap_err();
    assert_eq!(err, InterpolationError::MissingDerivatives);

    let err = Hermite::new(&[0.0, 1.0], &[0.0, 1.0], &[]).unwrap_err();
    assert_eq!(err, InterpolationError::MissingDerivatives);
}

#[test]
fn mis_sized_derivatives() {
    let err = Hermite::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], &[1.0, 1.0]).unwrap_err();
    assert_eq!(err, InterpolationError::DerivativeLength { expected: 3, got: 2 });
}

#[test]
fn derivatives_set_before_x_checked_on_build() {
    let err = HermiteCfg::new()
        .set_derivatives(&[1.0]).unwrap()
        .set_x(&[0.0, 1.0]).unwrap()
        .set_y(&[0.0, 1.0]).unwrap()
        .build()
        .unwrap_err();
    assert_eq!(err, InterpolationError::DerivativeLength { expected: 2, got: 1 });
}

#[test]
fn non_finite_derivative() {
    let err = Hermite::new(&[0.0, 1.0], &[0.0, 1.0], &[0.0, f64::NAN]).unwrap_err();
    assert_eq!(err, InterpolationError::NonFiniteVec { idx: 1 });
}
