//! # nodal
//!
//! One-dimensional interpolation through sample points.
//!
//! Every method is built once from owned copies of the data and then
//! evaluated repeatedly through the [`interpolation::Interpolator`] trait.
//!
//! ```
//! use nodal::interpolation::{create, Algorithm, Interpolator};
//!
//! let x = [0.0, 1.0, 2.0];
//! let y = [0.0, 1.0, 4.0];
//!
//! let model = create(Algorithm::Newton, &x, &y, &[]).unwrap();
//! assert!((model.eval(1.5).unwrap() - 2.25).abs() < 1e-12);
//! ```

pub mod interpolation;
