//! Error types for excel-af

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from reading or writing sheet cells
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid row, column, cell address or table geometry
    #[error(transparent)]
    Address(#[from] excel_af_core::Error),

    /// A cell value was rejected by its acceptance condition
    #[error("Unacceptable value of the cell `{address}`.\n{message}")]
    UnacceptableValue { address: String, message: String },

    /// Requested number type is neither "float" nor "int"
    #[error("Unacceptable number type: {0}")]
    UnknownNumberType(String),

    /// A cell value could not be read as the requested type
    #[error("Cell `{address}` holds {actual} value '{value}', expected {expected}")]
    InvalidValueType {
        address: String,
        expected: &'static str,
        actual: &'static str,
        value: String,
    },

    /// Fewer values than cells on the table's longitudinal line
    #[error("Table {table} needs {expected} values, got {actual}")]
    NotEnoughValues {
        table: String,
        expected: usize,
        actual: usize,
    },

    /// Failure reported by the Excel COM bridge
    #[cfg(feature = "com")]
    #[error(transparent)]
    Bridge(#[from] excel_af_com::BridgeError),

    /// Failure reported by any other sheet backend
    #[error("Sheet backend error: {0}")]
    Backend(String),
}

impl Error {
    /// Create a backend error with a message
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        Error::Backend(msg.into())
    }
}
