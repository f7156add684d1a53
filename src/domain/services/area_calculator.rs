//! Area Calculator Service
//!
//! Pure, stateless consumer of the [`Shape`] port. It delegates to the
//! capability and never inspects concrete types, so new figure variants
//! require no changes here.

use crate::domain::ports::Shape;

/// Computes areas for any value satisfying the [`Shape`] capability
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaCalculator;

impl AreaCalculator {
    /// Create a new calculator
    pub fn new() -> Self {
        Self
    }

    /// Area of a single figure
    ///
    /// Returns exactly what the figure itself reports; no branching on the
    /// concrete variant is permitted here.
    pub fn area(&self, shape: &dyn Shape) -> f64 {
        shape.area()
    }

    /// Sum of areas over a heterogeneous collection of figures
    pub fn total<'a>(&self, shapes: impl IntoIterator<Item = &'a dyn Shape>) -> f64 {
        shapes.into_iter().map(Shape::area).sum()
    }
}
