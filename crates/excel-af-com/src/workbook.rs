//! Workbook handle for an Excel workbook open in the bridge

use std::path::{Path, PathBuf};

use excel_com_protocol::SheetRef;

use crate::bridge::{linux_to_wine_path, ExcelBridge, Result};
use crate::sheet::Sheet;

/// A handle to an open workbook in the Excel COM bridge.
///
/// The workbook stays open in Excel until [`close`](Self::close) is called
/// or the bridge shuts down.
pub struct Workbook<'a> {
    bridge: &'a ExcelBridge,
    handle: u64,
    /// Where the workbook was last opened from or saved to.
    path: Option<PathBuf>,
}

impl<'a> Workbook<'a> {
    pub(crate) fn new(bridge: &'a ExcelBridge, handle: u64, path: Option<PathBuf>) -> Self {
        Self {
            bridge,
            handle,
            path,
        }
    }

    /// Get the internal handle ID.
    pub fn handle(&self) -> u64 {
        self.handle
    }

    /// The Linux path this workbook is associated with, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// A sheet of this workbook, by index, name or [`SheetRef::Active`].
    pub fn sheet(&self, sheet: impl Into<SheetRef>) -> Sheet<'a> {
        Sheet::new(self.bridge, self.handle, sheet.into())
    }

    /// The sheet currently active in Excel.
    pub fn active_sheet(&self) -> Sheet<'a> {
        self.sheet(SheetRef::Active)
    }

    /// Worksheet names in workbook order.
    pub fn sheet_names(&self) -> Result<Vec<String>> {
        self.bridge.list_sheets(self.handle)
    }

    /// Save the workbook to a Linux path (converted to a WINE path).
    ///
    /// Format is inferred from the extension (.xlsx, .xlsm, .xls, .csv).
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.bridge
            .save_workbook(self.handle, &linux_to_wine_path(path))?;
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Save back to the path the workbook was opened from or last saved to.
    ///
    /// A workbook with no known path is left untouched.
    pub fn save_in_place(&self) -> Result<()> {
        match &self.path {
            Some(path) => self
                .bridge
                .save_workbook(self.handle, &linux_to_wine_path(path)),
            None => {
                tracing::warn!("workbook {} has no path, not saved", self.handle);
                Ok(())
            }
        }
    }

    /// Save the workbook using a raw Windows/WINE path (no conversion).
    pub fn save_raw_path(&self, wine_path: &str) -> Result<()> {
        self.bridge.save_workbook(self.handle, wine_path)
    }

    /// Close the workbook without saving.
    pub fn close(self) -> Result<()> {
        self.bridge.close_workbook(self.handle)
    }
}
