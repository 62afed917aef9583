//! Record names
//!
//! Every table is keyed by a human-entered name. Names are trimmed on the way
//! in and compared case-insensitively everywhere.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Price must be a non-negative number, got {0}")]
    InvalidPrice(f64),

    #[error("Quantity must be greater than zero")]
    ZeroQuantity,

    #[error("Name must not start or end with whitespace: '{0}'")]
    PaddedName(String),
}

/// Trims a user-supplied name, rejecting blank input
pub fn normalize_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Checks a stored name: not blank and already trimmed
pub fn check_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if trimmed.len() != name.len() {
        return Err(ValidationError::PaddedName(name.to_string()));
    }
    Ok(())
}

/// Returns true if two names refer to the same record
pub fn same_name(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}
