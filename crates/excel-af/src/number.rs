//! Typed numeric reads

use std::fmt;
use std::str::FromStr;

use excel_com_protocol::CellValue;

use crate::error::{Error, Result};

/// The kind of number a read should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    Float,
    Int,
}

/// A number read from a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Float(f64),
    Int(i64),
}

impl NumberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberType::Float => "float",
            NumberType::Int => "int",
        }
    }

    /// Convert a raw cell value to this number type.
    ///
    /// Empty cells give `None`. Floats are truncated toward zero for `Int`,
    /// booleans count as 1 and 0, and numeric strings are parsed.
    pub fn coerce(self, value: &CellValue, address: &str) -> Result<Option<Number>> {
        let invalid = || Error::InvalidValueType {
            address: address.to_string(),
            expected: self.as_str(),
            actual: value.type_name(),
            value: value.to_string(),
        };

        let number = match (self, value) {
            (_, CellValue::Null) => return Ok(None),
            (NumberType::Float, CellValue::Number(n)) => Number::Float(*n),
            (NumberType::Int, CellValue::Number(n)) if n.is_finite() => {
                Number::Int(n.trunc() as i64)
            }
            (NumberType::Float, CellValue::Bool(b)) => Number::Float(if *b { 1.0 } else { 0.0 }),
            (NumberType::Int, CellValue::Bool(b)) => Number::Int(i64::from(*b)),
            (NumberType::Float, CellValue::String(s)) => {
                Number::Float(s.trim().parse().map_err(|_| invalid())?)
            }
            (NumberType::Int, CellValue::String(s)) => {
                Number::Int(s.trim().parse().map_err(|_| invalid())?)
            }
            _ => return Err(invalid()),
        };
        Ok(Some(number))
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "float" => Ok(NumberType::Float),
            "int" => Ok(NumberType::Int),
            other => Err(Error::UnknownNumberType(other.to_string())),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Float(n) => *n,
            Number::Int(n) => *n as f64,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(*n),
            Number::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Float(n) => write!(f, "{n}"),
            Number::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<Number> for CellValue {
    fn from(n: Number) -> Self {
        CellValue::Number(n.as_f64())
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}
