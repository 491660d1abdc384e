//! # excel-af
//!
//! Typed, validating access to Excel worksheet cells.
//!
//! excel-af sits on top of a live sheet (an Excel workbook driven through the
//! COM bridge, or an in-memory [`MemorySheet`]) and adds:
//!
//! - Addressing with [`Row`], [`Column`], [`Cell`] and directional [`Table`]s
//! - Numeric reads with type coercion and a pluggable acceptance check
//!   ([`CheckOptions`], [`CellChecker`])
//! - Writes that round numbers to a requested precision
//! - Table-wide reads, writes and clears that walk the table along its direction
//!
//! ## Example
//!
//! ```rust
//! use excel_af::prelude::*;
//!
//! let mut sheet = CustomSheet::new(MemorySheet::new("Sheet1"));
//!
//! let table = Table::new(Cell::parse("B2").unwrap(), Direction::Vertical, 3).unwrap();
//! let last = sheet.set_numbers_list(&table, &[1.234, 5.678, 9.0], Some(1)).unwrap();
//! assert_eq!(last.address(), "B4");
//!
//! let positive = CheckOptions::new()
//!     .with_condition(|v| v.as_f64().map_or(false, |n| n > 0.0))
//!     .with_error_message("Values must be positive.");
//! let numbers = sheet.get_numbers_list(&table, NumberType::Float, &positive).unwrap();
//! assert_eq!(numbers[0], Some(Number::Float(1.2)));
//! ```
//!
//! With the `com` feature (on by default) a workbook file can be opened
//! through the bridge:
//!
//! ```rust,no_run
//! use excel_af::prelude::*;
//! use excel_af::com::BookSheet;
//! use excel_af_com::{ExcelBridge, ExcelBridgeConfig};
//!
//! # fn main() -> Result<()> {
//! let bridge = ExcelBridge::start(ExcelBridgeConfig::from_env())?;
//! let mut sheet = CustomSheet::<BookSheet>::open(&bridge, "input.xlsm", None)?;
//! sheet.set_value(1.156, "B1", Some(2))?;
//! sheet.save()?;
//! # Ok(())
//! # }
//! ```

pub mod checker;
#[cfg(feature = "com")]
pub mod com;
pub mod custom_sheet;
pub mod data;
pub mod error;
pub mod handle;
pub mod memory;
pub mod number;
pub mod prelude;

pub use checker::{CellChecker, CheckOptions, Condition, RejectPolicy};
pub use custom_sheet::{CustomSheet, DEFAULT_ACCURACY};
pub use data::TableData;
pub use error::{Error, Result};
pub use handle::{SheetHandle, ToCell};
pub use memory::MemorySheet;
pub use number::{Number, NumberType};

// Re-export addressing and value types
pub use excel_af_core::{math_round, Cell, Column, Direction, Row, Table, TableCells};
pub use excel_com_protocol::{CellError, CellValue};
