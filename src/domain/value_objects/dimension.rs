//! Dimension Value Object
//!
//! A validated, immutable length used for every shape attribute.
//! Validation happens exactly once, here; shapes built from `Dimension`s
//! are valid by construction and area computation cannot fail.

use std::fmt;

use serde::Serialize;

use crate::error::{PlanimeterError, PlanimeterResult};

/// A finite, non-negative length
///
/// The only mutation point is [`Dimension::new`]; the wrapped value is
/// read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dimension(f64);

impl Dimension {
    /// Create a validated dimension
    ///
    /// `name` identifies the attribute being validated (e.g. `"width"`)
    /// and is carried into the error for the caller's diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`PlanimeterError::InvalidDimension`] if `value` is
    /// negative, NaN, or infinite.
    pub fn new(name: &'static str, value: f64) -> PlanimeterResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(PlanimeterError::InvalidDimension {
                dimension: name,
                value,
            });
        }
        Ok(Self(value))
    }

    /// Get the wrapped length
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Dimension> for f64 {
    fn from(dimension: Dimension) -> Self {
        dimension.0
    }
}
