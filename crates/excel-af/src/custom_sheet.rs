//! Typed, validating accessors over a sheet handle

use excel_af_core::{math_round, Cell, Table};
use excel_com_protocol::CellValue;

use crate::checker::{CheckOptions, RejectPolicy};
use crate::data::TableData;
use crate::error::{Error, Result};
use crate::handle::{SheetHandle, ToCell};
use crate::number::{Number, NumberType};

/// Decimal places used when clearing or filling a table without an explicit accuracy
pub const DEFAULT_ACCURACY: u32 = 2;

/// A worksheet with typed reads, rounded writes and table-wide operations.
///
/// All calls go straight through to the underlying [`SheetHandle`], one cell
/// at a time.
#[derive(Debug, Clone)]
pub struct CustomSheet<S> {
    sheet: S,
}

impl<S: SheetHandle> CustomSheet<S> {
    pub fn new(sheet: S) -> Self {
        Self { sheet }
    }

    pub fn sheet(&self) -> &S {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut S {
        &mut self.sheet
    }

    pub fn into_inner(self) -> S {
        self.sheet
    }

    /// Raw value of a cell
    pub fn get_value(&self, address: impl ToCell) -> Result<CellValue> {
        let cell = address.to_cell()?;
        self.sheet.get_value(&cell)
    }

    /// Whether a cell holds a truthy value (see [`CellValue::is_truthy`])
    pub fn get_boolean_value(&self, address: impl ToCell) -> Result<bool> {
        Ok(self.get_value(address)?.is_truthy())
    }

    /// Read a number from a cell.
    ///
    /// The raw value is checked against `options` first; an empty cell that
    /// passes the check reads as `None`. A rejected value either fails the
    /// read or reads as `None`, depending on the options' [`RejectPolicy`].
    pub fn get_number(
        &self,
        address: impl ToCell,
        number_type: NumberType,
        options: &CheckOptions,
    ) -> Result<Option<Number>> {
        let cell = address.to_cell()?;
        let value = self.sheet.get_value(&cell)?;
        let address = cell.address();

        let checker = options.checker(value, address.as_str());
        if let Err(err) = checker.check() {
            return match options.reject_policy() {
                RejectPolicy::Error => Err(err),
                RejectPolicy::Skip => {
                    tracing::warn!("{}: skipping rejected value in {address}", self.sheet.name());
                    Ok(None)
                }
            };
        }

        number_type.coerce(checker.value(), &address)
    }

    /// Read a float from a cell with no acceptance condition
    pub fn get_float(&self, address: impl ToCell) -> Result<Option<f64>> {
        Ok(self
            .get_number(address, NumberType::Float, &CheckOptions::default())?
            .map(|n| n.as_f64()))
    }

    /// Read an integer from a cell with no acceptance condition
    pub fn get_int(&self, address: impl ToCell) -> Result<Option<i64>> {
        Ok(self
            .get_number(address, NumberType::Int, &CheckOptions::default())?
            .and_then(|n| n.as_i64()))
    }

    /// Read the numbers along a table's longitudinal line.
    pub fn get_numbers_list(
        &self,
        table: &Table,
        number_type: NumberType,
        options: &CheckOptions,
    ) -> Result<Vec<Option<Number>>> {
        tracing::debug!("{}: reading {number_type} list from {table}", self.sheet.name());
        table
            .linear_cells()
            .map(|item| {
                let (_, _, cell) = item?;
                self.get_number(cell, number_type, options)
            })
            .collect()
    }

    /// Write a value to a cell.
    ///
    /// With a non-zero `accuracy`, numbers are rounded to that many decimal
    /// places first. `None` and `Some(0)` both write numbers unrounded; other
    /// values are always written as given.
    pub fn set_value(
        &mut self,
        value: impl Into<CellValue>,
        address: impl ToCell,
        accuracy: Option<u32>,
    ) -> Result<()> {
        let cell = address.to_cell()?;
        let value = match (value.into(), accuracy) {
            (CellValue::Number(n), Some(digits)) if digits > 0 => {
                CellValue::Number(math_round(n, digits))
            }
            (value, _) => value,
        };
        tracing::trace!("{}: {cell} <- {value}", self.sheet.name());
        self.sheet.set_value(&cell, value)
    }

    /// Write values along a table's longitudinal line.
    ///
    /// Needs at least as many values as the table's longitudinal size; any
    /// extra values are ignored. Nothing is written if the line reaches past
    /// column Z. Returns the last cell written.
    pub fn set_numbers_list<V>(
        &mut self,
        table: &Table,
        values: &[V],
        accuracy: Option<u32>,
    ) -> Result<Cell>
    where
        V: Clone + Into<CellValue>,
    {
        let expected = table.size_longitudinal() as usize;
        if values.len() < expected {
            return Err(Error::NotEnoughValues {
                table: table.to_string(),
                expected,
                actual: values.len(),
            });
        }

        table.last_linear_cell()?;

        tracing::debug!("{}: writing {expected} values to {table}", self.sheet.name());
        let mut last = table.first_cell();
        for (item, value) in table.linear_cells().zip(values) {
            let (_, _, cell) = item?;
            self.set_value(value.clone(), cell, accuracy)?;
            last = cell;
        }
        Ok(last)
    }

    /// Fill every cell of a table from `data`, clearing cells it has no value for.
    ///
    /// With no data the whole table is cleared. Cells are written
    /// longitudinal-major; nothing is written if the table reaches past
    /// column Z. Returns the last cell written.
    pub fn clear_or_fill_table(
        &mut self,
        table: &Table,
        accuracy: Option<u32>,
        data: Option<&TableData>,
    ) -> Result<Cell> {
        tracing::debug!(
            "{}: {} {table}",
            self.sheet.name(),
            if data.is_some() { "filling" } else { "clearing" }
        );
        table.last_cell()?;

        let mut last = table.first_cell();
        for item in table.cells() {
            let (l, t, cell) = item?;
            let value = data
                .map(|d| d.value(l as usize, t as usize))
                .unwrap_or_default();
            self.set_value(value, cell, accuracy)?;
            last = cell;
        }
        Ok(last)
    }

    /// Clear every cell of a table
    pub fn clear_table(&mut self, table: &Table) -> Result<Cell> {
        self.clear_or_fill_table(table, Some(DEFAULT_ACCURACY), None)
    }

    /// Fill a table, rounding numbers to [`DEFAULT_ACCURACY`]
    pub fn fill_table(&mut self, table: &Table, data: &TableData) -> Result<Cell> {
        self.clear_or_fill_table(table, Some(DEFAULT_ACCURACY), Some(data))
    }
}
