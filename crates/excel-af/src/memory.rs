//! In-process sheet backend

use std::collections::BTreeMap;

use excel_af_core::Cell;
use excel_com_protocol::CellValue;

use crate::error::Result;
use crate::handle::SheetHandle;

/// A worksheet held entirely in memory.
///
/// Only non-empty cells are stored; reading a missing cell yields
/// [`CellValue::Null`]. Useful for tests and for preparing values offline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySheet {
    name: String,
    cells: BTreeMap<Cell, CellValue>,
}

impl MemorySheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Builder-style insert of a single cell
    pub fn with_value(mut self, cell: Cell, value: impl Into<CellValue>) -> Self {
        self.insert(cell, value.into());
        self
    }

    /// Value at `cell`, if the cell is not empty
    pub fn get(&self, cell: &Cell) -> Option<&CellValue> {
        self.cells.get(cell)
    }

    fn insert(&mut self, cell: Cell, value: CellValue) {
        if value.is_null() {
            self.cells.remove(&cell);
        } else {
            self.cells.insert(cell, value);
        }
    }

    /// Non-empty cells in row-then-column order
    pub fn cells(&self) -> impl Iterator<Item = (&Cell, &CellValue)> + '_ {
        self.cells.iter()
    }

    /// Number of non-empty cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl SheetHandle for MemorySheet {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn get_value(&self, cell: &Cell) -> Result<CellValue> {
        Ok(self.cells.get(cell).cloned().unwrap_or_default())
    }

    fn set_value(&mut self, cell: &Cell, value: CellValue) -> Result<()> {
        self.insert(*cell, value);
        Ok(())
    }
}
