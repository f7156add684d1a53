//! Circle Value Object

use std::f64::consts::PI;

use serde::Serialize;

use crate::domain::ports::Shape;
use crate::domain::value_objects::Dimension;
use crate::error::PlanimeterResult;

/// A circle described by its radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    radius: Dimension,
}

impl Circle {
    /// Create a circle from a raw radius
    ///
    /// # Errors
    ///
    /// Returns [`PlanimeterError::InvalidDimension`] if the radius is
    /// negative, NaN, or infinite.
    ///
    /// [`PlanimeterError::InvalidDimension`]: crate::error::PlanimeterError::InvalidDimension
    pub fn new(radius: f64) -> PlanimeterResult<Self> {
        Ok(Self {
            radius: Dimension::new("radius", radius)?,
        })
    }

    /// Get the radius
    pub fn radius(&self) -> f64 {
        self.radius.get()
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius.get() * self.radius.get()
    }
}
