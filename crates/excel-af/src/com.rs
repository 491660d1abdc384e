//! Sheet handles backed by the Excel COM bridge

use std::path::Path;

use excel_af_com::{ExcelBridge, Sheet, SheetRef, Workbook};
use excel_af_core::Cell;
use excel_com_protocol::CellValue;

use crate::custom_sheet::CustomSheet;
use crate::error::Result;
use crate::handle::SheetHandle;

impl SheetHandle for Sheet<'_> {
    fn name(&self) -> String {
        self.sheet_ref().to_string()
    }

    fn get_value(&self, cell: &Cell) -> Result<CellValue> {
        Ok(self.get_cell_value(&cell.address())?)
    }

    fn set_value(&mut self, cell: &Cell, value: CellValue) -> Result<()> {
        Ok(self.set_cell_value(&cell.address(), value)?)
    }
}

/// A sheet together with the workbook that owns it, so edits can be saved.
pub struct BookSheet<'a> {
    workbook: Workbook<'a>,
    sheet: Sheet<'a>,
}

impl<'a> BookSheet<'a> {
    pub fn new(workbook: Workbook<'a>, sheet: impl Into<SheetRef>) -> Self {
        let sheet = workbook.sheet(sheet);
        Self { workbook, sheet }
    }

    pub fn workbook(&self) -> &Workbook<'a> {
        &self.workbook
    }

    pub fn sheet(&self) -> &Sheet<'a> {
        &self.sheet
    }

    /// Save the workbook back to its file
    pub fn save(&self) -> Result<()> {
        Ok(self.workbook.save_in_place()?)
    }

    /// Close the workbook without saving
    pub fn close(self) -> Result<()> {
        Ok(self.workbook.close()?)
    }
}

impl SheetHandle for BookSheet<'_> {
    fn name(&self) -> String {
        match self.workbook.path() {
            Some(path) => format!("{}[{}]", path.display(), self.sheet.sheet_ref()),
            None => SheetHandle::name(&self.sheet),
        }
    }

    fn get_value(&self, cell: &Cell) -> Result<CellValue> {
        self.sheet.get_value(cell)
    }

    fn set_value(&mut self, cell: &Cell, value: CellValue) -> Result<()> {
        self.sheet.set_value(cell, value)
    }
}

impl<'a> CustomSheet<BookSheet<'a>> {
    /// Open a workbook file and wrap one of its sheets.
    ///
    /// A missing file is created (and saved) as a new empty workbook. Without
    /// a sheet name the sheet active in Excel is used.
    pub fn open(
        bridge: &'a ExcelBridge,
        workbook_path: impl AsRef<Path>,
        sheet_name: Option<&str>,
    ) -> Result<Self> {
        let workbook = bridge.open_or_create_workbook(workbook_path)?;
        let sheet = sheet_name.map_or(SheetRef::Active, SheetRef::from);
        Ok(CustomSheet::new(BookSheet::new(workbook, sheet)))
    }

    /// Save the workbook back to its file
    pub fn save(&self) -> Result<()> {
        self.sheet().save()
    }
}
