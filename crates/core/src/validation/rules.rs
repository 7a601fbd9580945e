//! Validation rule and result types.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::fields::FormField;

/// How a field's raw input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    /// Must parse as a `YYYY-MM-DD` calendar date.
    Date,
    /// Tri-state selector; the placeholder counts as unset.
    Boolean,
}

/// Which check a violation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    Required,
    MinLength,
    DateFormat,
}

/// Declarative rule set for one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    pub field: FormField,
    pub kind: FieldKind,
    /// Message when the field is required and empty. `None` means optional.
    pub required: Option<String>,
    /// Minimum length in characters, with its message.
    pub min_length: Option<(usize, String)>,
    /// Message for a non-empty date that does not parse.
    pub invalid_date: Option<String>,
}

impl FieldRule {
    pub fn text(field: FormField) -> Self {
        Self::of_kind(field, FieldKind::Text)
    }

    pub fn date(field: FormField) -> Self {
        Self::of_kind(field, FieldKind::Date)
    }

    pub fn boolean(field: FormField) -> Self {
        Self::of_kind(field, FieldKind::Boolean)
    }

    fn of_kind(field: FormField, kind: FieldKind) -> Self {
        Self {
            field,
            kind,
            required: None,
            min_length: None,
            invalid_date: None,
        }
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    pub fn min_length(mut self, min: usize, message: impl Into<String>) -> Self {
        self.min_length = Some((min, message.into()));
        self
    }

    pub fn invalid_date(mut self, message: impl Into<String>) -> Self {
        self.invalid_date = Some(message.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: FormField,
    pub rule_type: RuleType,
    pub message: String,
}

/// Outcome of evaluating a policy: at most one violation per field.
///
/// An empty result means the values are submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<FormField, FieldViolation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<&FieldViolation> {
        self.errors.get(&field)
    }

    pub fn message(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(|v| v.message.as_str())
    }

    /// Fields that failed, in display order.
    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.errors.values()
    }

    /// Keep only the violations whose field satisfies `keep`.
    pub fn filtered(&self, mut keep: impl FnMut(FormField) -> bool) -> Self {
        Self {
            errors: self
                .errors
                .iter()
                .filter(|(field, _)| keep(**field))
                .map(|(field, v)| (*field, v.clone()))
                .collect(),
        }
    }

    pub(crate) fn insert(&mut self, violation: FieldViolation) {
        self.errors.entry(violation.field).or_insert(violation);
    }
}

impl FromIterator<FieldViolation> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = FieldViolation>>(iter: I) -> Self {
        let mut result = Self::default();
        for violation in iter {
            result.insert(violation);
        }
        result
    }
}
