//! Errors raised by the record stores

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ValidationError;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("{kind} already exists: {name}")]
    DuplicateKey { kind: &'static str, name: String },

    #[error("Not enough stock of {name}: requested {requested}, only {available} available")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Table unavailable: {}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed table {} at line {line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: String,
    },
}

impl StoreError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_record() {
        let err = StoreError::NotFound {
            kind: "Product",
            name: "Tea".to_string(),
        };
        assert_eq!(err.to_string(), "Product not found: Tea");

        let err = StoreError::InsufficientStock {
            name: "Espresso".to_string(),
            requested: 9,
            available: 8,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock of Espresso: requested 9, only 8 available"
        );
    }

    #[test]
    fn validation_errors_become_invalid_input() {
        let err: StoreError = ValidationError::EmptyName.into();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: Name must not be empty");
    }
}
