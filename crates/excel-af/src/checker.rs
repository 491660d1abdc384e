//! Acceptance conditions for values read from cells

use std::fmt;
use std::sync::Arc;

use excel_com_protocol::CellValue;

use crate::error::{Error, Result};

/// A predicate a cell value must satisfy to be accepted.
pub type Condition = Arc<dyn Fn(&CellValue) -> bool + Send + Sync>;

/// Checks one cell value against a condition.
///
/// Without a condition every value, including an empty cell, is accepted.
///
/// ```
/// use excel_af::{CellChecker, CellValue};
///
/// let checker = CellChecker::new(CellValue::Number(-1.0), "B3")
///     .with_condition(|v| v.as_f64().map_or(false, |n| n >= 0.0))
///     .with_error_message("Expected a non-negative number.");
///
/// let err = checker.check().unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Unacceptable value of the cell `B3`.\nExpected a non-negative number."
/// );
/// ```
#[derive(Clone)]
pub struct CellChecker {
    value: CellValue,
    address: String,
    condition: Option<Condition>,
    error_message: String,
}

impl CellChecker {
    pub fn new(value: CellValue, address: impl Into<String>) -> Self {
        Self {
            value,
            address: address.into(),
            condition: None,
            error_message: String::new(),
        }
    }

    pub fn with_condition<F>(mut self, condition: F) -> Self
    where
        F: Fn(&CellValue) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Arc::new(condition));
        self
    }

    /// Set the hint appended to the error when the condition fails
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// First line of the rejection message, naming the cell
    pub fn get_error_message_for_cell(&self) -> String {
        format!("Unacceptable value of the cell `{}`.", self.address)
    }

    pub fn is_satisfied(&self) -> bool {
        self.condition
            .as_ref()
            .map_or(true, |condition| condition(&self.value))
    }

    /// Fail with [`Error::UnacceptableValue`] unless the condition holds.
    pub fn check(&self) -> Result<()> {
        if self.is_satisfied() {
            return Ok(());
        }
        Err(Error::UnacceptableValue {
            address: self.address.clone(),
            message: self.error_message.clone(),
        })
    }
}

impl fmt::Debug for CellChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellChecker")
            .field("value", &self.value)
            .field("address", &self.address)
            .field("has_condition", &self.condition.is_some())
            .field("error_message", &self.error_message)
            .finish()
    }
}

/// What a read does with a value its condition rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RejectPolicy {
    /// Fail the read with [`Error::UnacceptableValue`]
    #[default]
    Error,
    /// Treat the cell as empty and keep going
    Skip,
}

/// Reusable read-side validation: a condition, its error hint and a reject policy.
///
/// The default accepts everything.
#[derive(Clone, Default)]
pub struct CheckOptions {
    condition: Option<Condition>,
    error_message: String,
    reject_policy: RejectPolicy,
}

impl CheckOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept values for which `condition` returns true
    pub fn with_condition<F>(mut self, condition: F) -> Self
    where
        F: Fn(&CellValue) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Arc::new(condition));
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    pub fn with_reject_policy(mut self, policy: RejectPolicy) -> Self {
        self.reject_policy = policy;
        self
    }

    pub fn reject_policy(&self) -> RejectPolicy {
        self.reject_policy
    }

    /// Build the checker for one cell read
    pub fn checker(&self, value: CellValue, address: impl Into<String>) -> CellChecker {
        CellChecker {
            value,
            address: address.into(),
            condition: self.condition.clone(),
            error_message: self.error_message.clone(),
        }
    }
}

impl fmt::Debug for CheckOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckOptions")
            .field("has_condition", &self.condition.is_some())
            .field("error_message", &self.error_message)
            .field("reject_policy", &self.reject_policy)
            .finish()
    }
}
