//! Worksheet handle forwarding cell reads and writes to the bridge

use excel_com_protocol::{CellValue, SheetRef};

use crate::bridge::{ExcelBridge, Result};

/// One worksheet of a workbook open in the bridge.
///
/// Cheap to clone; it only holds the bridge reference and two identifiers.
#[derive(Clone)]
pub struct Sheet<'a> {
    bridge: &'a ExcelBridge,
    workbook: u64,
    sheet: SheetRef,
}

impl<'a> Sheet<'a> {
    pub(crate) fn new(bridge: &'a ExcelBridge, workbook: u64, sheet: SheetRef) -> Self {
        Self {
            bridge,
            workbook,
            sheet,
        }
    }

    pub fn sheet_ref(&self) -> &SheetRef {
        &self.sheet
    }

    pub fn workbook_handle(&self) -> u64 {
        self.workbook
    }

    /// Read a cell's value (e.g. "B3").
    pub fn get_cell_value(&self, cell: &str) -> Result<CellValue> {
        self.bridge
            .get_cell_value(self.workbook, self.sheet.clone(), cell)
    }

    /// Write a cell's value.
    ///
    /// Accepts anything that converts to CellValue:
    /// - `&str` / `String` -> String value
    /// - `f64`, `i32`, `i64` -> Number value
    /// - `bool` -> Boolean value
    /// - `None` -> clears the cell
    pub fn set_cell_value(&self, cell: &str, value: impl Into<CellValue>) -> Result<()> {
        self.bridge
            .set_cell_value(self.workbook, self.sheet.clone(), cell, value.into())
    }

    /// Clear a cell's contents.
    pub fn clear_cell(&self, cell: &str) -> Result<()> {
        self.set_cell_value(cell, CellValue::Null)
    }
}

impl std::fmt::Debug for Sheet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sheet")
            .field("workbook", &self.workbook)
            .field("sheet", &self.sheet)
            .finish()
    }
}
