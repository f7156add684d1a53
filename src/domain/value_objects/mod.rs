//! Domain Value Objects
//!
//! Immutable value types that represent plane figures. Each shape variant is
//! independent: none wraps or subtypes another, so mutating hazards between
//! sibling variants cannot exist by construction.

mod circle;
mod dimension;
mod rectangle;
mod square;

pub use circle::Circle;
pub use dimension::Dimension;
pub use rectangle::Rectangle;
pub use square::Square;
