//! Prelude module - common imports for excel-af users
//!
//! ```rust
//! use excel_af::prelude::*;
//! ```

pub use crate::{
    // Addressing
    Cell,
    // Validation
    CellChecker,
    // Values
    CellValue,
    CheckOptions,
    Column,
    // Accessors
    CustomSheet,
    Direction,
    // Error types
    Error,
    MemorySheet,
    Number,
    NumberType,
    RejectPolicy,
    Result,
    Row,
    SheetHandle,
    Table,
    TableData,
    DEFAULT_ACCURACY,
};
