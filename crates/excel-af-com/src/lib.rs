//! Native Linux client library for Excel COM automation via a WINE bridge process.
//!
//! This crate spawns a Windows `.exe` under WINE that automates Excel through COM,
//! communicating over JSON-over-stdio. It provides a small Rust API for
//! opening/creating workbooks, reading and writing cell values, and saving files.
//!
//! # Architecture
//!
//! ```text
//! Your Rust code (native Linux)
//!     └── ExcelBridge (this crate)
//!           └── spawns: wine excel-com-bridge.exe
//!                 └── COM: Excel.Application
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use excel_af_com::{ExcelBridge, ExcelBridgeConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bridge = ExcelBridge::start(ExcelBridgeConfig::from_env())?;
//!     let wb = bridge.open_or_create_workbook("report.xlsx")?;
//!     let sheet = wb.active_sheet();
//!     sheet.set_cell_value("A1", "Total")?;
//!     sheet.set_cell_value("B1", 42.0)?;
//!     println!("B1 = {}", sheet.get_cell_value("B1")?);
//!     wb.save_in_place()?;
//!     bridge.shutdown()?;
//!     Ok(())
//! }
//! ```

mod bridge;
mod sheet;
mod workbook;

pub use bridge::{
    linux_to_wine_path, BridgeError, ExcelBridge, ExcelBridgeConfig, Result, BRIDGE_EXE_ENV,
    WINE_ENV,
};
pub use excel_com_protocol::{CellError, CellValue, SheetRef};
pub use sheet::Sheet;
pub use workbook::Workbook;
