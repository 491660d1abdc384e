//! Table directions

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The axis a table runs along.
///
/// A vertical table's longitudinal axis is its rows; a horizontal table's is its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }

    /// The orthogonal direction
    pub fn transpose(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Map (longitudinal, transverse) shifts to (row, column) shifts.
    pub fn to_row_col(self, longitudinal: u32, transverse: u32) -> (u32, u32) {
        match self {
            Direction::Vertical => (longitudinal, transverse),
            Direction::Horizontal => (transverse, longitudinal),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            other => Err(Error::InvalidDirection(other.to_string())),
        }
    }
}
