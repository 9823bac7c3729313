//! Item name validation.

use crate::error::AppError;

/// A name that passed validation: present and at least one character long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    /// Validate the `item` field of a create request.
    pub fn for_create(raw: Option<String>) -> Result<Self, AppError> {
        Self::parse(raw, "Item name is required")
    }

    /// Validate the `item` field of an update request.
    pub fn for_update(raw: Option<String>) -> Result<Self, AppError> {
        Self::parse(raw, "Item name must be at least 1 character long")
    }

    fn parse(raw: Option<String>, missing: &str) -> Result<Self, AppError> {
        match raw {
            Some(s) if !s.is_empty() => Ok(Self(s)),
            _ => Err(AppError::Validation(missing.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
