//! Form validation engine.
//!
//! Provides rule types, the two built-in policies, and a pure-logic
//! evaluator. Nothing here touches the network.

pub mod evaluator;
pub mod policy;
pub mod rules;

pub use evaluator::evaluate_policy;
pub use policy::ValidationPolicy;
pub use rules::{FieldKind, FieldRule, FieldViolation, RuleType, ValidationResult};
