//! Feedback intake domain types and validation.
//!
//! Zero network dependencies: field enumerations, the submission and
//! retrieval wire shapes, form variants, and the declarative validation
//! policies that the controllers evaluate.

pub mod error;
pub mod fields;
pub mod query;
pub mod record;
pub mod validation;
pub mod variant;

pub use error::CoreError;
pub use fields::{FormField, SearchField};
pub use query::SearchQuery;
pub use record::{DemoDate, FeedbackRecord, FeedbackSubmission, FormValues, RecordId};
pub use validation::{FieldViolation, ValidationPolicy, ValidationResult};
pub use variant::Variant;
