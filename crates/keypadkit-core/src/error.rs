//! Error handling for KeypadKit
//!
//! Errors raised by the shared types and by the design model. Numeric
//! layout inputs are never rejected here; range checks belong to whoever
//! collects the input.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A colour string was not `#rgb` or `#rrggbb`
    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    /// A parameter was outside its accepted range
    #[error("Invalid value for '{name}': {value} ({reason})")]
    InvalidParameter {
        /// The parameter name as shown to the user.
        name: String,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: String,
    },

    /// A cell index does not exist in the current grid
    #[error("Button ({row}, {col}) is outside the {rows}x{cols} grid")]
    CellOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Row count of the grid.
        rows: usize,
        /// Column count of the grid.
        cols: usize,
    },
}

impl CoreError {
    /// Create a new InvalidParameter error
    pub fn invalid_parameter(name: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
            reason: reason.into(),
        }
    }
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
