// src/error.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One reason for a failed result: a machine-readable code plus a
/// human-readable description. Codes are caller-defined strings; nothing
/// here interprets them, and no format is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {description}")]
pub struct ErrorInfo {
    pub code: String,
    pub description: String,
}

impl ErrorInfo {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}
