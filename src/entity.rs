// src/entity.rs
use crate::error::ErrorInfo;
use crate::result::DataResult;
use serde::{Deserialize, Serialize};

/// Outcome of an operation that produces a value on success. Embeds a
/// [`DataResult`] for the success flag and error handling, and carries the
/// entity only on the success path; every failure constructor leaves it
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityResult<T> {
    pub result: DataResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<T>,
}

impl<T> EntityResult<T> {
    pub fn success(entity: T) -> Self {
        Self {
            result: DataResult::success(),
            entity: Some(entity),
        }
    }

    pub fn with_error(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            result: DataResult::with_error(code, description),
            entity: None,
        }
    }

    pub fn from_error(error: ErrorInfo) -> Self {
        Self {
            result: DataResult::from_error(error),
            entity: None,
        }
    }

    pub fn from_errors(errors: Vec<ErrorInfo>) -> Self {
        Self {
            result: DataResult::from_errors(errors),
            entity: None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.result.succeeded
    }

    pub fn add_error(&mut self, code: impl Into<String>, description: impl Into<String>) {
        self.result.add_error(code, description);
    }

    pub fn errors(&self) -> &[ErrorInfo] {
        self.result.errors()
    }

    pub fn has_error(&self, code: &str) -> bool {
        self.result.has_error(code)
    }
}

impl<T> From<EntityResult<T>> for DataResult {
    fn from(value: EntityResult<T>) -> Self {
        value.result
    }
}
