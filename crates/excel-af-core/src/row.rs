//! Row numbers

use crate::error::{Error, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A 1-based row number plus a shift relative to it.
///
/// The effective row is `base + shift`. Two rows are equal when their
/// effective numbers are equal, however they were built.
#[derive(Debug, Clone, Copy)]
pub struct Row {
    base: u32,
    shift: u32,
}

impl Row {
    /// Create a row from a base number (>= 1) and a shift.
    ///
    /// Fails if the shifted number would not fit in a `u32`.
    pub fn new(number: u32, shift: u32) -> Result<Self> {
        if number < 1 {
            return Err(Error::InvalidRow(number));
        }
        check_shift(number, shift)?;
        Ok(Self {
            base: number,
            shift,
        })
    }

    /// Create an unshifted row
    pub fn from_number(number: u32) -> Result<Self> {
        Self::new(number, 0)
    }

    /// Effective row number (base + shift)
    pub fn number(&self) -> u32 {
        // base + shift is checked on every construction and update
        self.base.saturating_add(self.shift)
    }

    /// Row number before shifting
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Number of rows this row is shifted by
    pub fn shift(&self) -> u32 {
        self.shift
    }

    /// Replace the base number, keeping the shift
    pub fn set_number(&mut self, number: u32) -> Result<()> {
        if number < 1 {
            return Err(Error::InvalidRow(number));
        }
        check_shift(number, self.shift)?;
        self.base = number;
        Ok(())
    }

    pub fn set_shift(&mut self, shift: u32) -> Result<()> {
        check_shift(self.base, shift)?;
        self.shift = shift;
        Ok(())
    }

    /// A new row based at this row's effective number and shifted by `by`.
    pub fn shifted(&self, by: u32) -> Result<Row> {
        Row::new(self.number(), by)
    }
}

fn check_shift(number: u32, shift: u32) -> Result<()> {
    match number.checked_add(shift) {
        Some(_) => Ok(()),
        None => Err(Error::RowOverflow { number, shift }),
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.number() == other.number()
    }
}

impl Eq for Row {}

impl Hash for Row {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number().hash(state);
    }
}

impl PartialOrd for Row {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Row {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.number().cmp(&other.number())
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl TryFrom<u32> for Row {
    type Error = Error;

    fn try_from(number: u32) -> Result<Self> {
        Self::from_number(number)
    }
}
