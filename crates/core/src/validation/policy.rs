//! The built-in validation policies.
//!
//! Both variants share one field list and differ only in which fields
//! carry a `required` rule (plus the school form's minimum name length).

use serde::Serialize;

use crate::fields::FormField;
use crate::validation::rules::FieldRule;
use crate::variant::Variant;

pub const MSG_STUDENT_NAME_REQUIRED: &str = "Student Name is required";
pub const MSG_STUDENT_NAME_MIN: &str = "Must be at least 2 characters";
pub const MSG_FATHER_REQUIRED: &str = "Father's details are required";
pub const MSG_MOTHER_REQUIRED: &str = "Mother's details are required";
pub const MSG_CONTACT_REQUIRED: &str = "Contact Number is required";
pub const MSG_ADDRESS_REQUIRED: &str = "Address is required";
pub const MSG_SCHOOL_REQUIRED: &str = "School Name is required";
pub const MSG_DEMO_DATE_REQUIRED: &str = "Demo Date is required";
pub const MSG_DEMO_DATE_INVALID: &str = "Demo Date must be a valid date";
pub const MSG_SALES_REF_REQUIRED: &str = "Sales Reference Name is required";

/// Minimum student name length on the school form.
pub const SCHOOL_STUDENT_NAME_MIN: usize = 2;

/// A named set of per-field rules bound to one form variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationPolicy {
    variant: Variant,
    rules: Vec<FieldRule>,
}

impl ValidationPolicy {
    /// Build a policy from explicit rules. Fields without a rule are
    /// never validated.
    pub fn new(variant: Variant, rules: Vec<FieldRule>) -> Self {
        Self { variant, rules }
    }

    /// Every field required; student name at least two characters.
    pub fn school() -> Self {
        Self::new(
            Variant::School,
            vec![
                FieldRule::text(FormField::StudentName)
                    .required(MSG_STUDENT_NAME_REQUIRED)
                    .min_length(SCHOOL_STUDENT_NAME_MIN, MSG_STUDENT_NAME_MIN),
                FieldRule::text(FormField::FatherDetails).required(MSG_FATHER_REQUIRED),
                FieldRule::text(FormField::MotherDetails).required(MSG_MOTHER_REQUIRED),
                FieldRule::text(FormField::ContactNumber).required(MSG_CONTACT_REQUIRED),
                FieldRule::text(FormField::Address).required(MSG_ADDRESS_REQUIRED),
                FieldRule::text(FormField::SchoolName).required(MSG_SCHOOL_REQUIRED),
                FieldRule::boolean(FormField::InterestedOnline),
                FieldRule::date(FormField::DemoDate)
                    .required(MSG_DEMO_DATE_REQUIRED)
                    .invalid_date(MSG_DEMO_DATE_INVALID),
                FieldRule::text(FormField::SalesRefName).required(MSG_SALES_REF_REQUIRED),
            ],
        )
    }

    /// Only student name, contact number and demo date are required.
    pub fn engineering() -> Self {
        Self::new(
            Variant::Engineering,
            vec![
                FieldRule::text(FormField::StudentName).required(MSG_STUDENT_NAME_REQUIRED),
                FieldRule::text(FormField::FatherDetails),
                FieldRule::text(FormField::MotherDetails),
                FieldRule::text(FormField::ContactNumber).required(MSG_CONTACT_REQUIRED),
                FieldRule::text(FormField::Address),
                FieldRule::text(FormField::SchoolName),
                FieldRule::boolean(FormField::InterestedOnline),
                FieldRule::date(FormField::DemoDate)
                    .required(MSG_DEMO_DATE_REQUIRED)
                    .invalid_date(MSG_DEMO_DATE_INVALID),
                FieldRule::text(FormField::SalesRefName),
            ],
        )
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn rule(&self, field: FormField) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.field == field)
    }

    pub fn is_required(&self, field: FormField) -> bool {
        self.rule(field).is_some_and(FieldRule::is_required)
    }

    /// Required fields, in display order.
    pub fn required_fields(&self) -> Vec<FormField> {
        self.rules
            .iter()
            .filter(|r| r.is_required())
            .map(|r| r.field)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_requires_every_text_field() {
        let policy = ValidationPolicy::school();
        assert_eq!(
            policy.required_fields(),
            vec![
                FormField::StudentName,
                FormField::FatherDetails,
                FormField::MotherDetails,
                FormField::ContactNumber,
                FormField::Address,
                FormField::SchoolName,
                FormField::DemoDate,
                FormField::SalesRefName,
            ]
        );
    }

    #[test]
    fn engineering_requires_three_fields() {
        let policy = ValidationPolicy::engineering();
        assert_eq!(
            policy.required_fields(),
            vec![FormField::StudentName, FormField::ContactNumber, FormField::DemoDate]
        );
    }

    #[test]
    fn online_interest_is_never_required() {
        assert!(!ValidationPolicy::school().is_required(FormField::InterestedOnline));
        assert!(!ValidationPolicy::engineering().is_required(FormField::InterestedOnline));
    }

    #[test]
    fn policies_cover_every_field() {
        for policy in [ValidationPolicy::school(), ValidationPolicy::engineering()] {
            for field in FormField::ALL {
                assert!(policy.rule(field).is_some(), "{field} missing a rule");
            }
        }
    }
}
