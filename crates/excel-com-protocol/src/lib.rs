//! Wire types for talking to the Excel COM bridge process.
//!
//! The bridge is a Windows executable running under WINE that owns the
//! `Excel.Application` COM objects. Client and bridge exchange newline-delimited
//! JSON: one [`Request`] per line on the bridge's stdin, one [`Response`] per
//! line on its stdout.
//!
//! ```text
//! -> {"id":3,"cmd":"GetCellValue","params":{"workbook":1,"sheet":null,"cell":"B3"}}
//! <- {"id":3,"status":"ok","data":{"value":4.5}}
//! ```

use serde::{Deserialize, Serialize};

/// A command sent to the bridge process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Monotonically increasing request ID, echoed back in the response.
    pub id: u64,
    #[serde(flatten)]
    pub command: Command,
}

/// Commands understood by the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "params")]
pub enum Command {
    /// Initialize COM and start Excel.
    Init,

    /// Create a new empty workbook. Returns a workbook handle.
    CreateWorkbook,

    /// Open a workbook from a Windows path. Returns a workbook handle.
    OpenWorkbook { path: String },

    /// Read the value of one cell.
    GetCellValue {
        workbook: u64,
        sheet: SheetRef,
        cell: String,
    },

    /// Write one cell. A `Null` value clears the cell.
    SetCellValue {
        workbook: u64,
        sheet: SheetRef,
        cell: String,
        value: CellValue,
    },

    /// List worksheet names in workbook order. Returns sheet names.
    ListSheets { workbook: u64 },

    /// Save the workbook to a Windows path; the format follows the extension.
    SaveWorkbook { workbook: u64, path: String },

    /// Close a workbook without saving.
    CloseWorkbook { workbook: u64 },

    /// Close everything, quit Excel and exit the bridge.
    Shutdown,
}

/// Which worksheet of a workbook a command targets.
///
/// Serialized as a bare number (0-based index), a bare string (name) or
/// `null` (whatever sheet is active in Excel).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetRef {
    #[default]
    Active,
    Index(u32),
    Name(String),
}

impl From<u32> for SheetRef {
    fn from(index: u32) -> Self {
        SheetRef::Index(index)
    }
}

impl From<&str> for SheetRef {
    fn from(name: &str) -> Self {
        SheetRef::Name(name.to_string())
    }
}

impl From<Option<String>> for SheetRef {
    fn from(name: Option<String>) -> Self {
        name.map_or(SheetRef::Active, SheetRef::Name)
    }
}

impl std::fmt::Display for SheetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetRef::Active => write!(f, "<active>"),
            SheetRef::Index(i) => write!(f, "#{i}"),
            SheetRef::Name(name) => write!(f, "{name}"),
        }
    }
}

/// A raw cell value as Excel reports it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Error(CellError),
}

/// An Excel error value such as `#DIV/0!`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellError {
    pub code: String,
}

/// A reply from the bridge process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// ID of the request being answered.
    pub id: u64,
    #[serde(flatten)]
    pub result: ResponseResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ResponseResult {
    #[serde(rename = "ok")]
    Ok {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<ResponseData>,
    },
    #[serde(rename = "error")]
    Error { message: String },
}

/// Payload of a successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    WorkbookHandle { workbook: u64 },
    Value { value: CellValue },
    SheetNames { sheets: Vec<String> },
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Spreadsheet truthiness: empty, zero, the empty string, `FALSE` and error
    /// values are false, everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Null | CellValue::Error(_) => false,
            CellValue::Bool(b) => *b,
            CellValue::Number(n) => *n != 0.0,
            CellValue::String(s) => !s.is_empty(),
        }
    }

    /// Short type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "empty",
            CellValue::Bool(_) => "boolean",
            CellValue::Number(_) => "number",
            CellValue::String(_) => "string",
            CellValue::Error(_) => "error",
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => write!(f, "<empty>"),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Error(e) => write!(f, "{}", e.code),
        }
    }
}
