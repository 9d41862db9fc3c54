#![allow(dead_code)]

use nodal::interpolation::errors::InterpolationError;

pub type NodalResult = Result<(), InterpolationError>;

pub const ATOL: f64 = 1e-12;
pub const RTOL: f64 = 0.0;

#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
pub fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_vec_close_tol(a, b, ATOL);
}

#[inline]
pub fn assert_vec_close_tol(a: &[f64], b: &[f64], atol: f64) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            (ai - bi).abs() <= atol,
            "mismatch at index {}: left={}, right={}, ATOL={}",
            i, ai, bi, atol
        );
    }
}

/// `num` evenly spaced points over `[a, b]`, last one pinned to `b`.
pub fn grid(a: f64, b: f64, num: usize) -> Vec<f64> {
    let step = (b - a) / (num - 1) as f64;
    (0..num).map(|k| (a + step * k as f64).min(b)).collect()
}
