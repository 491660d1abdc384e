//! Column names

use crate::error::{Error, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Index of the last addressable column ('Z')
pub const MAX_COLUMN_INDEX: u32 = 25;

/// A single-letter column name plus a shift relative to it.
///
/// Only columns `A` through `Z` are addressable; the shift is bounded so the
/// shifted letter never passes `Z`.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    base: char,
    shift: u32,
}

impl Column {
    /// Create a column from a capital letter and a shift.
    pub fn new(name: char, shift: u32) -> Result<Self> {
        validate_letter(name)?;
        validate_shift(name, shift)?;
        Ok(Self { base: name, shift })
    }

    /// Parse a column name ("A".."Z")
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c, 0),
            _ => Err(Error::InvalidColumn(s.to_string())),
        }
    }

    /// Create a column from its 0-based index (0 = A)
    pub fn from_index(index: u32) -> Result<Self> {
        if index > MAX_COLUMN_INDEX {
            return Err(Error::ColumnOverflow {
                name: 'A',
                shift: index,
            });
        }
        Self::new('A', index)
    }

    /// Effective column letter (base shifted by `shift`)
    pub fn name(&self) -> char {
        // validated on construction, always within A..=Z
        (self.base as u8 + self.shift as u8) as char
    }

    /// Column letter before shifting
    pub fn base(&self) -> char {
        self.base
    }

    pub fn shift(&self) -> u32 {
        self.shift
    }

    /// 0-based index of the effective column (A = 0, Z = 25)
    pub fn index(&self) -> u32 {
        letter_index(self.base) + self.shift
    }

    /// Replace the base letter, keeping the shift.
    ///
    /// Fails if the current shift would push the new letter past `Z`.
    pub fn set_name(&mut self, name: char) -> Result<()> {
        validate_letter(name)?;
        validate_shift(name, self.shift)?;
        self.base = name;
        Ok(())
    }

    pub fn set_shift(&mut self, shift: u32) -> Result<()> {
        validate_shift(self.base, shift)?;
        self.shift = shift;
        Ok(())
    }

    /// A new column based at this column's effective letter and shifted by `by`.
    pub fn shifted(&self, by: u32) -> Result<Column> {
        Column::new(self.name(), by)
    }
}

fn letter_index(c: char) -> u32 {
    c as u32 - 'A' as u32
}

fn validate_letter(name: char) -> Result<()> {
    if name.is_ascii_uppercase() {
        Ok(())
    } else {
        Err(Error::InvalidColumn(name.to_string()))
    }
}

fn validate_shift(name: char, shift: u32) -> Result<()> {
    if shift <= MAX_COLUMN_INDEX - letter_index(name) {
        Ok(())
    } else {
        Err(Error::ColumnOverflow { name, shift })
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Column {}

impl Hash for Column {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl PartialOrd for Column {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Column {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name().cmp(&other.name())
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Column {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<char> for Column {
    type Error = Error;

    fn try_from(name: char) -> Result<Self> {
        Self::new(name, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_column_shift() {
        let col = Column::new('A', 1).unwrap();
        assert_eq!(col.name(), 'B');
        assert_eq!(col.base(), 'A');
        assert_eq!(col.index(), 1);
        assert_eq!(col.to_string(), "B");
    }

    #[test]
    fn test_column_upper_bound() {
        assert!(Column::new('Z', 0).is_ok());
        assert_eq!(
            Column::new('Z', 1),
            Err(Error::ColumnOverflow {
                name: 'Z',
                shift: 1
            })
        );
        assert!(Column::new('A', 25).is_ok());
        assert!(Column::new('A', 26).is_err());
    }

    #[test]
    fn test_column_rejects_non_capital_letters() {
        assert!(Column::new('a', 0).is_err());
        assert!(Column::new('1', 0).is_err());
        assert!(Column::new('Ä', 0).is_err());
        assert!(Column::parse("AB").is_err());
        assert!(Column::parse("").is_err());
        assert_eq!(Column::parse("C").unwrap().name(), 'C');
    }

    #[test]
    fn test_set_name_revalidates_shift() {
        let mut col = Column::new('A', 3).unwrap();
        assert!(col.set_name('X').is_err());
        assert_eq!(col.name(), 'D');
        col.set_name('W').unwrap();
        assert_eq!(col.name(), 'Z');
    }

    #[test]
    fn test_set_shift() {
        let mut col = Column::new('Y', 0).unwrap();
        col.set_shift(1).unwrap();
        assert_eq!(col.name(), 'Z');
        assert!(col.set_shift(2).is_err());
        assert_eq!(col.shift(), 1);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Column::from_index(0).unwrap().name(), 'A');
        assert_eq!(Column::from_index(25).unwrap().name(), 'Z');
        assert!(Column::from_index(26).is_err());
    }

    #[test]
    fn test_equality_uses_effective_letter() {
        assert_eq!(Column::new('A', 2).unwrap(), Column::new('C', 0).unwrap());
        assert!(Column::new('B', 0).unwrap() < Column::new('A', 2).unwrap());
    }

    proptest! {
        #[test]
        fn shifted_column_stays_in_range(base in 0u32..26, shift in 0u32..40) {
            let name = (b'A' + base as u8) as char;
            match Column::new(name, shift) {
                Ok(col) => {
                    prop_assert!(base + shift <= MAX_COLUMN_INDEX);
                    prop_assert_eq!(col.index(), base + shift);
                    prop_assert!(col.name().is_ascii_uppercase());
                }
                Err(_) => prop_assert!(base + shift > MAX_COLUMN_INDEX),
            }
        }
    }
}
