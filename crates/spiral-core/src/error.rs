//! Error types for spiral operations.

use crate::point::Point;
use std::error::Error;
use std::fmt;

/// Errors from the coordinate mapper and the value walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpiralError {
    /// An index or threshold was not a positive integer.
    InvalidArgument {
        /// Which argument was rejected (`"index"`, `"threshold"`, ...).
        name: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// A neighbour sum no longer fits in `u64`.
    ValueOverflow {
        /// The cell whose value overflowed.
        at: Point,
    },
    /// A grid cell was written twice.
    CellOccupied {
        /// The cell that already holds a value.
        at: Point,
        /// The value already stored there.
        existing: u64,
    },
    /// The walk visited its configured maximum number of cells without
    /// reaching the threshold.
    CellBudgetExhausted {
        /// The configured budget.
        max_cells: usize,
    },
}

impl fmt::Display for SpiralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { name, value } => {
                write!(f, "{name} must be a positive integer, got {value}")
            }
            Self::ValueOverflow { at } => write!(f, "cell value at {at} overflows u64"),
            Self::CellOccupied { at, existing } => {
                write!(f, "cell {at} already holds value {existing}")
            }
            Self::CellBudgetExhausted { max_cells } => {
                write!(f, "walk exhausted its budget of {max_cells} cells")
            }
        }
    }
}

impl Error for SpiralError {}

/// Validate that `value` is at least 1 and return it as `u64`.
///
/// Zero and negative values are rejected with
/// [`SpiralError::InvalidArgument`] rather than clamped.
pub fn require_positive(name: &'static str, value: i64) -> Result<u64, SpiralError> {
    if value < 1 {
        return Err(SpiralError::InvalidArgument { name, value });
    }
    Ok(value as u64)
}
