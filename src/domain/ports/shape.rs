//! Shape Port
//!
//! The single capability every plane figure exposes. Consumers depend on
//! this trait alone, never on a concrete variant, so adding a new figure
//! touches only that figure's definition.

/// Capability of reporting an area
///
/// Contract: `area()` is a pure function of the implementor's own
/// attributes and returns a finite, non-negative value. Implementors are
/// validated at construction, so there is no error path here.
///
/// The trait is object-safe; heterogeneous collections of `&dyn Shape`
/// work anywhere a concrete variant does.
pub trait Shape {
    /// Compute the area of this figure
    fn area(&self) -> f64;
}
