//! Domain Layer
//!
//! This is the core of Planimeter - pure geometry without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable, validated value types (Dimension, Rectangle, Square, Circle)
//! - `ports/` - Capability definitions (Shape)
//! - `services/` - Domain services (AreaCalculator)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network
//! 2. **Pure Functions** - Area computation depends only on a shape's own attributes
//! 3. **Valid by Construction** - Dimensions are validated once, at construction;
//!    values are immutable afterwards, so no consumer ever sees an invalid shape

pub mod ports;
pub mod services;
pub mod value_objects;
