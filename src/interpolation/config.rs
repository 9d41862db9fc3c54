//! Shared configuration for interpolation algorithms.
//!
//! Provides [`CommonCfg`], the borrowed sample set every method is built
//! from, and the `impl_common_cfg!` macro that gives each method's own
//! config the shared fallible setters.
//!
//! [`CommonCfg`] fields
//! - `x`           : x values provided
//! - `y`           : y values provided
//! - `min_spacing` : optional minimum distance between adjacent `x`
//!
//! Configs only borrow; calling `build()` on a method config copies the
//! data into the owned model, so the caller's buffers may be dropped.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::validate;


#[derive(Debug, Copy, Clone, Default)]
pub struct CommonCfg<'a> {
    pub(crate) x          : &'a [f64],
    pub(crate) y          : &'a [f64],
    pub(crate) min_spacing: Option<f64>,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x          : &[],
            y          : &[],
            min_spacing: None,
        }
    }

    /// Full validation run right before a model is built.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        validate::validate(self.x, self.y)?;
        if let Some(tol) = self.min_spacing {
            validate::check_min_spacing(self.x, tol)?;
        }
        Ok(())
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn min_spacing(&self) -> Option<f64> { self.min_spacing }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_min_spacing(&mut self, v: f64) { self.min_spacing = Some(v); }
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;
                use $crate::interpolation::validate;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                validate::check_finite(v)?;
                if v.len() < 2 {
                    return Err(InterpolationError::InsufficientPoints { got: v.len() });
                }
                validate::check_increasing(v)?;
                if let Some(tol) = self.common.min_spacing {
                    validate::check_min_spacing(v, tol)?;
                }

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;
                use $crate::interpolation::validate;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                validate::check_finite(v)?;

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            /// Rejects adjacent `x` closer than `v`. Off by default.
            pub fn set_min_spacing(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;
                use $crate::interpolation::validate;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }
                if !self.common.x.is_empty() {
                    validate::check_min_spacing(self.common.x, v)?;
                }

                self.common.with_min_spacing(v);
                Ok(self)
            }

            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg<'a> {
                &self.common
            }
        }
    };
}
pub(crate) use impl_common_cfg;
