//! Defines the summary returned by batch evaluation.
//!
//! [`InterpolationReport`] bundles the values produced by
//! [`crate::interpolation::Interpolator::eval_report`] with metadata about
//! the model that produced them.

use crate::interpolation::algorithms::Algorithm;

/// Summary of a batch evaluation.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"newton"`)
/// - `n_provided`     : number of sample points `(x, y)` in the model
/// - `n_evaluated`    : number of query points
/// - `evaluated`      : model values at each query point, in order
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::with_capacity(n_evaluated),
        }
    }
}
