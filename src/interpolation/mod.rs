pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod traits;
pub mod validate;
pub(crate) mod helpers;

pub mod divided_differences;
pub mod dispatch;

pub mod lagrange;
pub mod newton;
pub mod hermite;
pub mod linear;
pub mod spline;

pub use algorithms::Algorithm;
pub use dispatch::{create, create_by_name, create_spline, Interpolant};
pub use divided_differences::{confluent_divided_differences, divided_differences, DividedDifferences};
pub use errors::InterpolationError;
pub use report::InterpolationReport;
pub use spline::BoundaryCondition;
pub use traits::Interpolator;
pub use validate::{is_valid, validate};
