//! The seam between the accessors and a live sheet.

use excel_af_core::Cell;
use excel_com_protocol::CellValue;

use crate::error::Result;

/// Raw single-cell access to a worksheet.
///
/// [`CustomSheet`](crate::CustomSheet) does all typing, validation and table
/// traversal on top of these two calls. Writing [`CellValue::Null`] clears
/// the cell.
pub trait SheetHandle {
    /// Human-readable sheet name, used in log output
    fn name(&self) -> String;

    fn get_value(&self, cell: &Cell) -> Result<CellValue>;

    fn set_value(&mut self, cell: &Cell, value: CellValue) -> Result<()>;
}

impl<S: SheetHandle + ?Sized> SheetHandle for &mut S {
    fn name(&self) -> String {
        (**self).name()
    }

    fn get_value(&self, cell: &Cell) -> Result<CellValue> {
        (**self).get_value(cell)
    }

    fn set_value(&mut self, cell: &Cell, value: CellValue) -> Result<()> {
        (**self).set_value(cell, value)
    }
}

/// Anything usable as a cell address: a [`Cell`] or an "A1" string.
pub trait ToCell {
    fn to_cell(&self) -> excel_af_core::Result<Cell>;
}

impl ToCell for Cell {
    fn to_cell(&self) -> excel_af_core::Result<Cell> {
        Ok(*self)
    }
}

impl ToCell for str {
    fn to_cell(&self) -> excel_af_core::Result<Cell> {
        Cell::parse(self)
    }
}

impl ToCell for String {
    fn to_cell(&self) -> excel_af_core::Result<Cell> {
        Cell::parse(self)
    }
}

impl<T: ToCell + ?Sized> ToCell for &T {
    fn to_cell(&self) -> excel_af_core::Result<Cell> {
        (**self).to_cell()
    }
}
