//! Error types for excel-af-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or shifting addresses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Row number below 1
    #[error("Cell row must be positive integer number, got {0}")]
    InvalidRow(u32),

    /// Shifted row number does not fit in a u32
    #[error("Row after shifting is too large ({number} shifted by {shift})")]
    RowOverflow { number: u32, shift: u32 },

    /// Column name is not a single Latin capital letter
    #[error("Cell column must be single Latin capital letter, got '{0}'")]
    InvalidColumn(String),

    /// Shifted column would leave the A..Z range
    #[error("Column after shifting must be single Latin capital letter ({name} shifted by {shift})")]
    ColumnOverflow { name: char, shift: u32 },

    /// Address string could not be split into column letter and row number
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// A cell needs either an address or both row and column, never a mix
    #[error("Conflict between `address`, `row` and `column`")]
    ConflictingCellParts,

    /// Direction other than horizontal or vertical
    #[error("Unacceptable direction: {0}")]
    InvalidDirection(String),

    /// Table size below its minimum
    #[error("{axis} size must be integer value greater than or equal to {min}, got {actual}")]
    InvalidSize {
        axis: &'static str,
        min: u32,
        actual: u32,
    },

    /// Shift past the edge of a table
    #[error("Too large {axis} shift: {shift} (size {size})")]
    ShiftTooLarge {
        axis: &'static str,
        shift: u32,
        size: u32,
    },
}
