/// Contract violations detected at the boundary between callers and the
/// controllers: names that are not part of a closed enumeration, or input
/// that cannot be coerced into the field's type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Unknown search field: {0}")]
    UnknownSearchField(String),

    #[error("Unknown form variant: {0}")]
    UnknownVariant(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Search {0} is required")]
    MissingQueryPart(&'static str),
}
