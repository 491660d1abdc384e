//! Cell addresses

use crate::column::Column;
use crate::error::{Error, Result};
use crate::row::Row;
use std::fmt;
use std::str::FromStr;

/// A cell on a sheet, addressed A1-style (e.g. "B3").
///
/// The address is always derived from the row and column, so the two views can
/// never disagree. Only single-letter columns are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: Row,
    column: Column,
}

impl Cell {
    /// Create a cell from a row and a column
    pub fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    /// Parse a cell from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use excel_af_core::Cell;
    ///
    /// let cell = Cell::parse("B3").unwrap();
    /// assert_eq!(cell.row().number(), 3);
    /// assert_eq!(cell.column().name(), 'B');
    /// assert_eq!(cell.address(), "B3");
    /// ```
    pub fn parse(address: &str) -> Result<Self> {
        let (row, column) = split_address(address)?;
        Ok(Self { row, column })
    }

    /// Build a cell from either an address or a row/column pair.
    ///
    /// Exactly one of the two forms must be given: an address alone, or both a
    /// row and a column with no address.
    pub fn from_parts(
        address: Option<&str>,
        row: Option<Row>,
        column: Option<Column>,
    ) -> Result<Self> {
        match (address, row, column) {
            (Some(address), None, None) => Self::parse(address),
            (None, Some(row), Some(column)) => Ok(Self::new(row, column)),
            _ => Err(Error::ConflictingCellParts),
        }
    }

    /// A1-style address of the cell
    pub fn address(&self) -> String {
        format!("{}{}", self.column, self.row)
    }

    pub fn row(&self) -> Row {
        self.row
    }

    pub fn column(&self) -> Column {
        self.column
    }

    /// Move the cell to a new address
    pub fn set_address(&mut self, address: &str) -> Result<()> {
        *self = Self::parse(address)?;
        Ok(())
    }

    pub fn set_row(&mut self, row: Row) {
        self.row = row;
    }

    pub fn set_column(&mut self, column: Column) {
        self.column = column;
    }

    /// The cell `rows` below and `cols` to the right of this one
    pub fn offset(&self, rows: u32, cols: u32) -> Result<Cell> {
        Ok(Cell {
            row: self.row.shifted(rows)?,
            column: self.column.shifted(cols)?,
        })
    }
}

/// Split "B3" into its row and column parts.
fn split_address(address: &str) -> Result<(Row, Column)> {
    let s = address.trim();
    let split = s
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(s.len());
    let (letters, digits) = s.split_at(split);

    if letters.is_empty() {
        return Err(Error::InvalidAddress(format!(
            "no column letter in '{address}'"
        )));
    }
    if digits.is_empty() {
        return Err(Error::InvalidAddress(format!(
            "no row number in '{address}'"
        )));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidAddress(format!(
            "invalid row number in '{address}'"
        )));
    }

    let number: u32 = digits
        .parse()
        .map_err(|_| Error::InvalidAddress(format!("row number too large in '{address}'")))?;

    Ok((Row::from_number(number)?, Column::parse(letters)?))
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for Cell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cell {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_parse() {
        let cell = Cell::parse("B3").unwrap();
        assert_eq!(cell.row().number(), 3);
        assert_eq!(cell.column().name(), 'B');

        let cell = Cell::parse("Z1048576").unwrap();
        assert_eq!(cell.row().number(), 1_048_576);
        assert_eq!(cell.column().name(), 'Z');

        let cell: Cell = " A1 ".parse().unwrap();
        assert_eq!(cell.address(), "A1");
    }

    #[test]
    fn test_cell_parse_errors() {
        assert!(matches!(Cell::parse(""), Err(Error::InvalidAddress(_))));
        assert!(matches!(Cell::parse("A"), Err(Error::InvalidAddress(_))));
        assert!(matches!(Cell::parse("1"), Err(Error::InvalidAddress(_))));
        assert!(matches!(Cell::parse("$A$1"), Err(Error::InvalidAddress(_))));
        assert!(matches!(Cell::parse("A1B"), Err(Error::InvalidAddress(_))));
        assert!(matches!(Cell::parse("A0"), Err(Error::InvalidRow(0))));
        assert!(matches!(Cell::parse("AA1"), Err(Error::InvalidColumn(_))));
        assert!(matches!(Cell::parse("b3"), Err(Error::InvalidColumn(_))));
        assert!(Cell::parse("A99999999999").is_err());
    }

    #[test]
    fn test_cell_round_trip_from_row_and_column() {
        let cell = Cell::new(Row::from_number(3).unwrap(), Column::new('B', 0).unwrap());
        assert_eq!(cell.address(), "B3");
        assert_eq!(cell.to_string(), "B3");
        assert_eq!(Cell::parse(&cell.address()).unwrap(), cell);
    }

    #[test]
    fn test_cell_address_uses_shifted_parts() {
        let cell = Cell::new(Row::new(1, 4).unwrap(), Column::new('A', 2).unwrap());
        assert_eq!(cell.address(), "C5");
    }

    #[test]
    fn test_from_parts_requires_exactly_one_form() {
        let row = Row::from_number(2).unwrap();
        let col = Column::new('D', 0).unwrap();

        assert_eq!(
            Cell::from_parts(Some("D2"), None, None).unwrap().address(),
            "D2"
        );
        assert_eq!(
            Cell::from_parts(None, Some(row), Some(col)).unwrap().address(),
            "D2"
        );

        assert_eq!(
            Cell::from_parts(None, None, None),
            Err(Error::ConflictingCellParts)
        );
        assert_eq!(
            Cell::from_parts(Some("D2"), Some(row), Some(col)),
            Err(Error::ConflictingCellParts)
        );
        assert_eq!(
            Cell::from_parts(Some("D2"), Some(row), None),
            Err(Error::ConflictingCellParts)
        );
        assert_eq!(
            Cell::from_parts(None, Some(row), None),
            Err(Error::ConflictingCellParts)
        );
    }

    #[test]
    fn test_setters_keep_address_in_sync() {
        let mut cell = Cell::parse("A1").unwrap();

        cell.set_row(Row::from_number(7).unwrap());
        assert_eq!(cell.address(), "A7");

        cell.set_column(Column::new('C', 0).unwrap());
        assert_eq!(cell.address(), "C7");

        cell.set_address("E2").unwrap();
        assert_eq!(cell.row().number(), 2);
        assert_eq!(cell.column().name(), 'E');

        assert!(cell.set_address("2E").is_err());
        assert_eq!(cell.address(), "E2");
    }

    #[test]
    fn test_offset() {
        let cell = Cell::parse("B2").unwrap();
        assert_eq!(cell.offset(0, 0).unwrap().address(), "B2");
        assert_eq!(cell.offset(3, 1).unwrap().address(), "C5");
        assert!(cell.offset(0, 25).is_err());
    }

    #[test]
    fn test_offset_past_last_row_number() {
        let cell = Cell::parse("A4294967295").unwrap();
        assert_eq!(cell.offset(0, 1).unwrap().address(), "B4294967295");
        assert_eq!(
            cell.offset(1, 0),
            Err(Error::RowOverflow {
                number: u32::MAX,
                shift: 1
            })
        );
    }
}
