//! Supplier domain model

use serde::{Deserialize, Serialize};

use super::name::{check_name, normalize_name, ValidationError};

/// A supplier the cafe orders from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Unique name (case-insensitive)
    pub name: String,

    /// Free-form contact details (email, phone)
    pub contact: String,

    /// What the supplier provides, e.g. "Coffee Beans & Tea"
    pub category: String,
}

impl Supplier {
    pub fn new(
        name: &str,
        contact: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: normalize_name(name)?,
            contact: contact.into(),
            category: category.into(),
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)?;
        Ok(())
    }
}
