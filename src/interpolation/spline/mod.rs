pub mod boundary;
pub mod cubic;
pub(crate) mod tridiagonal;

pub use boundary::BoundaryCondition;
pub use cubic::{CubicSpline, CubicSplineCfg};
