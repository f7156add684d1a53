//! Square Value Object
//!
//! An independent shape variant, not a constrained rectangle. The classic
//! `Square extends Rectangle` design lets a setter on one dimension silently
//! rewrite the other, which breaks any caller holding a rectangle-typed
//! reference. Keeping Square separate and immutable removes that hazard
//! class instead of patching it.

use serde::Serialize;

use crate::domain::ports::Shape;
use crate::domain::value_objects::Dimension;
use crate::error::PlanimeterResult;

/// A square described by a single side length
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Square {
    side: Dimension,
}

impl Square {
    /// Create a square from a raw side length
    ///
    /// # Errors
    ///
    /// Returns [`PlanimeterError::InvalidDimension`] if the side is
    /// negative, NaN, or infinite.
    ///
    /// [`PlanimeterError::InvalidDimension`]: crate::error::PlanimeterError::InvalidDimension
    pub fn new(side: f64) -> PlanimeterResult<Self> {
        Ok(Self {
            side: Dimension::new("side", side)?,
        })
    }

    /// Get the side length
    pub fn side(&self) -> f64 {
        self.side.get()
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side.get() * self.side.get()
    }
}
