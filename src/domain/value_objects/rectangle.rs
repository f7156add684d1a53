//! Rectangle Value Object
//!
//! An immutable rectangle with two independent dimensions.

use serde::Serialize;

use crate::domain::ports::Shape;
use crate::domain::value_objects::Dimension;
use crate::error::PlanimeterResult;

/// A rectangle with independent width and height
///
/// Width and height never influence each other; there is deliberately no
/// square subtype that could couple them behind a rectangle-typed reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    width: Dimension,
    height: Dimension,
}

impl Rectangle {
    /// Create a rectangle from raw dimensions
    ///
    /// # Errors
    ///
    /// Returns [`PlanimeterError::InvalidDimension`] if either dimension is
    /// negative, NaN, or infinite.
    ///
    /// [`PlanimeterError::InvalidDimension`]: crate::error::PlanimeterError::InvalidDimension
    pub fn new(width: f64, height: f64) -> PlanimeterResult<Self> {
        Ok(Self {
            width: Dimension::new("width", width)?,
            height: Dimension::new("height", height)?,
        })
    }

    /// Get the width
    pub fn width(&self) -> f64 {
        self.width.get()
    }

    /// Get the height
    pub fn height(&self) -> f64 {
        self.height.get()
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width.get() * self.height.get()
    }
}
