//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Shape variants provide concrete implementations.

pub mod shape;

pub use shape::Shape;
