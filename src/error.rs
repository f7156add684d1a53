//! Error types for Planimeter
//!
//! Uses `thiserror` for library errors.

use thiserror::Error;

/// Result type alias for Planimeter operations
pub type PlanimeterResult<T> = Result<T, PlanimeterError>;

/// Main error type for Planimeter operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanimeterError {
    /// A shape dimension was negative, NaN, or infinite
    #[error("invalid dimension '{dimension}': {value} (must be a finite, non-negative number)")]
    InvalidDimension {
        dimension: &'static str,
        value: f64,
    },
}
