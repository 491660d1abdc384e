//! # excel-af-core
//!
//! Spreadsheet addressing for the excel-af helpers.
//!
//! This crate provides the value types the sheet accessors are built on:
//! - [`Row`] and [`Column`] - Row numbers and column letters, each with a shift
//! - [`Cell`] - A row/column pair convertible to and from an "A1" address
//! - [`Direction`] - Whether a table runs horizontally or vertically
//! - [`Table`] - A rectangular region traversed along its direction
//!
//! ## Example
//!
//! ```rust
//! use excel_af_core::{Cell, Direction, Table};
//!
//! let first = Cell::parse("B2").unwrap();
//! let table = Table::new(first, Direction::Vertical, 3).unwrap();
//!
//! let line: Vec<String> = table
//!     .linear_cells()
//!     .map(|item| item.map(|(_, _, c)| c.address()))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(line, ["B2", "B3", "B4"]);
//! ```

pub mod cell;
pub mod column;
pub mod direction;
pub mod error;
pub mod round;
pub mod row;
pub mod table;

pub use cell::Cell;
pub use column::{Column, MAX_COLUMN_INDEX};
pub use direction::Direction;
pub use error::{Error, Result};
pub use round::math_round;
pub use row::Row;
pub use table::{Table, TableCells, DEFAULT_SIZE_TRANSVERSE};
