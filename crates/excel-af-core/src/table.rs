//! Directional tables and their cell traversal

use crate::cell::Cell;
use crate::direction::Direction;
use crate::error::{Error, Result};
use std::fmt;

/// Minimum longitudinal size of a table
pub const MIN_SIZE_LONGITUDINAL: u32 = 2;

/// Minimum transverse size of a table
pub const MIN_SIZE_TRANSVERSE: u32 = 1;

/// Transverse size used by [`Table::new`]
pub const DEFAULT_SIZE_TRANSVERSE: u32 = 2;

/// A rectangular region of a sheet anchored at its first cell.
///
/// Cells are addressed by a longitudinal shift (along the table's direction)
/// and a transverse shift (across it). For a vertical table the longitudinal
/// axis is rows; for a horizontal one it is columns.
///
/// ```text
/// vertical, 3 x 2        horizontal, 3 x 2
///   A1 B1                  A1 B1 C1
///   A2 B2                  A2 B2 C2
///   A3 B3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Table {
    first_cell: Cell,
    direction: Direction,
    size_longitudinal: u32,
    size_transverse: u32,
}

impl Table {
    /// Create a table with the default transverse size of 2
    pub fn new(first_cell: Cell, direction: Direction, size_longitudinal: u32) -> Result<Self> {
        Self::with_sizes(
            first_cell,
            direction,
            size_longitudinal,
            DEFAULT_SIZE_TRANSVERSE,
        )
    }

    /// Create a table with explicit sizes on both axes.
    ///
    /// Fails if either size is below its minimum. Cells past column Z are only
    /// reported when they are addressed.
    pub fn with_sizes(
        first_cell: Cell,
        direction: Direction,
        size_longitudinal: u32,
        size_transverse: u32,
    ) -> Result<Self> {
        let table = Self {
            first_cell,
            direction,
            size_longitudinal,
            size_transverse,
        };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<()> {
        if self.size_longitudinal < MIN_SIZE_LONGITUDINAL {
            return Err(Error::InvalidSize {
                axis: "Longitudinal",
                min: MIN_SIZE_LONGITUDINAL,
                actual: self.size_longitudinal,
            });
        }
        if self.size_transverse < MIN_SIZE_TRANSVERSE {
            return Err(Error::InvalidSize {
                axis: "Transverse",
                min: MIN_SIZE_TRANSVERSE,
                actual: self.size_transverse,
            });
        }
        Ok(())
    }

    pub fn first_cell(&self) -> Cell {
        self.first_cell
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn size_longitudinal(&self) -> u32 {
        self.size_longitudinal
    }

    pub fn size_transverse(&self) -> u32 {
        self.size_transverse
    }

    /// Total number of cells in the table
    pub fn cell_count(&self) -> usize {
        self.size_longitudinal as usize * self.size_transverse as usize
    }

    pub fn set_first_cell(&mut self, first_cell: Cell) -> Result<()> {
        self.update(|t| t.first_cell = first_cell)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        self.update(|t| t.direction = direction)
    }

    pub fn set_size_longitudinal(&mut self, size: u32) -> Result<()> {
        self.update(|t| t.size_longitudinal = size)
    }

    pub fn set_size_transverse(&mut self, size: u32) -> Result<()> {
        self.update(|t| t.size_transverse = size)
    }

    /// Apply a change only if the resulting table is still valid.
    fn update(&mut self, change: impl FnOnce(&mut Table)) -> Result<()> {
        let mut candidate = *self;
        change(&mut candidate);
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    /// Return the table cell shifted from the first one by the given amounts.
    ///
    /// Shifts may not exceed the table size on their axis.
    ///
    /// # Examples
    /// ```
    /// use excel_af_core::{Cell, Direction, Table};
    ///
    /// let first = Cell::parse("A1").unwrap();
    /// let table = Table::new(first, Direction::Vertical, 3).unwrap();
    /// assert_eq!(table.get_address(1, 0).unwrap().address(), "A2");
    ///
    /// let table = Table::new(first, Direction::Horizontal, 3).unwrap();
    /// assert_eq!(table.get_address(1, 0).unwrap().address(), "B1");
    /// ```
    pub fn get_address(&self, shift_longitudinal: u32, shift_transverse: u32) -> Result<Cell> {
        if shift_longitudinal > self.size_longitudinal {
            return Err(Error::ShiftTooLarge {
                axis: "longitudinal",
                shift: shift_longitudinal,
                size: self.size_longitudinal,
            });
        }
        if shift_transverse > self.size_transverse {
            return Err(Error::ShiftTooLarge {
                axis: "transverse",
                shift: shift_transverse,
                size: self.size_transverse,
            });
        }
        let (rows, cols) = self
            .direction
            .to_row_col(shift_longitudinal, shift_transverse);
        self.first_cell.offset(rows, cols)
    }

    /// Address of the first table cell
    pub fn get_first_cell_address(&self) -> String {
        self.first_cell.address()
    }

    /// The cell at the far corner of the table
    pub fn last_cell(&self) -> Result<Cell> {
        self.get_address(self.size_longitudinal - 1, self.size_transverse - 1)
    }

    /// Check whether a cell lies inside the table
    pub fn contains(&self, cell: &Cell) -> bool {
        let (rows, cols) = self
            .direction
            .to_row_col(self.size_longitudinal, self.size_transverse);
        let first_row = u64::from(self.first_cell.row().number());
        let first_col = u64::from(self.first_cell.column().index());
        let row = u64::from(cell.row().number());
        let col = u64::from(cell.column().index());
        (first_row..first_row + u64::from(rows)).contains(&row)
            && (first_col..first_col + u64::from(cols)).contains(&col)
    }

    /// The last cell of the first longitudinal line
    pub fn last_linear_cell(&self) -> Result<Cell> {
        self.get_address(self.size_longitudinal - 1, 0)
    }

    /// Iterate over the first longitudinal line (transverse shift 0)
    pub fn linear_cells(&self) -> TableCells {
        TableCells::new(*self, 1)
    }

    /// Iterate over every cell, longitudinal-major
    pub fn cells(&self) -> TableCells {
        TableCells::new(*self, self.size_transverse)
    }

    /// Format as an A1:B3 range string, or just the first cell if the far
    /// corner is past column Z
    pub fn to_range_string(&self) -> String {
        match self.last_cell() {
            Ok(last) => format!("{}:{}", self.first_cell, last),
            Err(_) => self.first_cell.address(),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.to_range_string(), self.direction)
    }
}

/// Iterator over table cells.
///
/// Yields `(shift_longitudinal, shift_transverse, cell)` for each position, or
/// the addressing error for a position that falls past column Z.
pub struct TableCells {
    table: Table,
    width: u32,
    longitudinal: u32,
    transverse: u32,
}

impl TableCells {
    fn new(table: Table, width: u32) -> Self {
        Self {
            table,
            width,
            longitudinal: 0,
            transverse: 0,
        }
    }

    fn remaining(&self) -> usize {
        let total = self.table.size_longitudinal as usize * self.width as usize;
        let done = self.longitudinal as usize * self.width as usize + self.transverse as usize;
        total.saturating_sub(done)
    }
}

impl Iterator for TableCells {
    type Item = Result<(u32, u32, Cell)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.longitudinal >= self.table.size_longitudinal {
            return None;
        }

        let (l, t) = (self.longitudinal, self.transverse);
        let item = self.table.get_address(l, t).map(|cell| (l, t, cell));

        self.transverse += 1;
        if self.transverse >= self.width {
            self.transverse = 0;
            self.longitudinal += 1;
        }

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TableCells {}
