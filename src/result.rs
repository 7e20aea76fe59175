// src/result.rs
use crate::error::ErrorInfo;
use serde::{Deserialize, Serialize};

/// Outcome of an operation that produces no value: an explicit success flag
/// plus the errors attached so far, in insertion order.
///
/// The flag is authoritative. An empty error collection does not imply
/// success; every constructor and mutator keeps the two consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResult {
    pub succeeded: bool,
    errors: Vec<ErrorInfo>,
}

impl DataResult {
    /// A fresh succeeded result with no errors. Every call mints a new
    /// value, so mutating one result never affects another.
    pub fn success() -> Self {
        Self {
            succeeded: true,
            errors: Vec::new(),
        }
    }

    /// A failed result carrying a single error built from `code` and
    /// `description`. Neither string is validated.
    pub fn with_error(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self::from_error(ErrorInfo::new(code, description))
    }

    /// A failed result carrying exactly the given error.
    pub fn from_error(error: ErrorInfo) -> Self {
        Self {
            succeeded: false,
            errors: vec![error],
        }
    }

    /// A failed result that takes ownership of the given errors. An empty
    /// vector still yields a failed result; the flag is never derived from
    /// the collection length.
    pub fn from_errors(errors: Vec<ErrorInfo>) -> Self {
        Self {
            succeeded: false,
            errors,
        }
    }

    /// Appends an error and marks the result failed. Each call appends,
    /// duplicates included; nothing flips a failed result back to success.
    pub fn add_error(&mut self, code: impl Into<String>, description: impl Into<String>) {
        self.succeeded = false;
        self.errors.push(ErrorInfo::new(code, description));
    }

    /// The errors attached so far, in insertion order.
    pub fn errors(&self) -> &[ErrorInfo] {
        &self.errors
    }

    /// Whether any attached error carries exactly this code. Comparison is
    /// case-sensitive.
    pub fn has_error(&self, code: &str) -> bool {
        self.errors.iter().any(|error| error.code == code)
    }
}

impl From<ErrorInfo> for DataResult {
    fn from(error: ErrorInfo) -> Self {
        Self::from_error(error)
    }
}

impl From<Vec<ErrorInfo>> for DataResult {
    fn from(errors: Vec<ErrorInfo>) -> Self {
        Self::from_errors(errors)
    }
}
