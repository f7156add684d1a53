//! Planimeter - area calculator for plane figures
//!
//! Planimeter models plane figures as immutable, validated value objects
//! unified by a single capability ([`Shape`]), and computes their areas
//! through a consumer ([`AreaCalculator`]) that never branches on concrete
//! types. Adding a new figure variant touches only that variant's
//! definition.

pub mod cli;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::ports::Shape;
pub use domain::services::AreaCalculator;
pub use domain::value_objects::{Circle, Dimension, Rectangle, Square};
pub use error::{PlanimeterError, PlanimeterResult};
