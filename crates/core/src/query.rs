//! Retrieval query descriptor.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::fields::SearchField;

/// A checked `(field, value)` pair ready to be sent to the retrieval
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub field: SearchField,
    pub value: String,
}

impl SearchQuery {
    pub fn new(field: SearchField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Check raw input from the search form.
    ///
    /// Both parts must be non-empty and the field must be one of the
    /// [`SearchField`] column names. The value is sent as typed.
    ///
    /// Unlike the form's required check, a whitespace-only value counts as
    /// empty here: such a search can never match anything useful.
    pub fn parse(field: &str, value: &str) -> Result<Self, CoreError> {
        if field.trim().is_empty() {
            return Err(CoreError::MissingQueryPart("field"));
        }
        if value.trim().is_empty() {
            return Err(CoreError::MissingQueryPart("value"));
        }
        Ok(Self::new(field.trim().parse()?, value))
    }
}
