//! Domain Services
//!
//! Stateless services operating on value objects through ports.

pub mod area_calculator;

pub use area_calculator::AreaCalculator;
