use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::helpers::linspace;
use crate::interpolation::report::InterpolationReport;

/// A built, queryable interpolation model.
///
/// Implementors own all of their state and never mutate it after
/// construction, so a model can be shared across threads freely.
pub trait Interpolator {
    /// method that built this model
    fn algorithm(&self) -> Algorithm;

    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// model parameters; meaning depends on the method
    fn coefficients(&self) -> &[f64];

    /// sample abscissas the model was built from
    fn nodes(&self) -> &[f64];

    /// `(x[0], x[n-1])`
    #[inline]
    fn domain(&self) -> (f64, f64) {
        let x = self.nodes();
        (x[0], x[x.len() - 1])
    }

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// evaluates many points and wraps them in an [`InterpolationReport`]
    fn eval_report(&self, xs: &[f64]) -> Result<InterpolationReport, InterpolationError> {
        let mut report = InterpolationReport::new(self.algorithm(), self.nodes().len(), xs.len());
        for &xq in xs {
            report.evaluated.push(self.eval(xq)?);
        }
        Ok(report)
    }

    /// evaluates `num_points` evenly spaced points across [`Interpolator::domain`]
    fn sample(&self, num_points: usize) -> Result<(Vec<f64>, Vec<f64>), InterpolationError> {
        let (x_min, x_max) = self.domain();
        let xs = linspace(x_min, x_max, num_points);
        let ys = self.eval_many(&xs)?;
        Ok((xs, ys))
    }
}
