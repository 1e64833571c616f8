use thiserror::Error;

use crate::grid::{MAX_SIDE, MIN_SIDE};

pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised by grid access and construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    /// User input that cannot describe a grid. Recoverable: ask again.
    #[error(transparent)]
    InvalidDimensions(#[from] DimensionsError),
    /// Cell index beyond `columns * rows`. Indicates a caller bug.
    #[error("cell index {index} is out of range for a grid of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },
    /// Bulk replacement with the wrong number of cells. Indicates a caller bug.
    #[error("expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DimensionsError {
    #[error("Please enter a valid number for both columns and rows")]
    NotANumber,
    #[error(
        "Please enter a number between {min} and {max} for both columns and rows (got {columns}x{rows})",
        min = MIN_SIDE,
        max = MAX_SIDE
    )]
    OutOfRange { columns: i64, rows: i64 },
}
