//! Policy evaluator -- pure logic, no network access.

use crate::record::{parse_demo_date, FormValues};
use crate::validation::policy::ValidationPolicy;
use crate::validation::rules::{FieldKind, FieldRule, FieldViolation, RuleType, ValidationResult};

/// Evaluate every rule of `policy` against `values`.
///
/// All fields are checked; a field reports only its first failing check
/// (required, then minimum length, then date format).
pub fn evaluate_policy(policy: &ValidationPolicy, values: &FormValues) -> ValidationResult {
    policy
        .rules()
        .iter()
        .filter_map(|rule| evaluate_rule(rule, values))
        .collect()
}

fn evaluate_rule(rule: &FieldRule, values: &FormValues) -> Option<FieldViolation> {
    match rule.kind {
        FieldKind::Boolean => evaluate_boolean(rule, values.interested_online),
        FieldKind::Text | FieldKind::Date => {
            let raw = values.text(rule.field).unwrap_or_default();
            if raw.is_empty() {
                return evaluate_required(rule);
            }
            evaluate_min_length(rule, raw).or_else(|| evaluate_date(rule, raw))
        }
    }
}

fn violation(rule: &FieldRule, rule_type: RuleType, message: &str) -> FieldViolation {
    FieldViolation {
        field: rule.field,
        rule_type,
        message: message.to_string(),
    }
}

fn evaluate_required(rule: &FieldRule) -> Option<FieldViolation> {
    rule.required
        .as_deref()
        .map(|message| violation(rule, RuleType::Required, message))
}

fn evaluate_boolean(rule: &FieldRule, value: Option<bool>) -> Option<FieldViolation> {
    match value {
        Some(_) => None,
        None => evaluate_required(rule),
    }
}

fn evaluate_min_length(rule: &FieldRule, raw: &str) -> Option<FieldViolation> {
    let (min, message) = rule.min_length.as_ref()?;
    if raw.chars().count() < *min {
        Some(violation(rule, RuleType::MinLength, message))
    } else {
        None
    }
}

fn evaluate_date(rule: &FieldRule, raw: &str) -> Option<FieldViolation> {
    if rule.kind != FieldKind::Date || parse_demo_date(raw).is_some() {
        return None;
    }
    let message = rule
        .invalid_date
        .as_deref()
        .unwrap_or("Must be a valid date");
    Some(violation(rule, RuleType::DateFormat, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FormField;
    use crate::validation::policy::*;
    use crate::variant::Variant;

    fn complete() -> FormValues {
        FormValues {
            student_name: "Meera Iyer".into(),
            father_details: "Suresh, engineer".into(),
            mother_details: "Lata, doctor".into(),
            contact_number: "9876543210".into(),
            address: "4 Hill View, Pune".into(),
            school_name: "St. Mary's".into(),
            interested_online: None,
            demo_date: "2024-07-01".into(),
            sales_ref_name: "Karan".into(),
        }
    }

    #[test]
    fn complete_values_pass_both_policies() {
        assert!(evaluate_policy(&ValidationPolicy::school(), &complete()).is_valid());
        assert!(evaluate_policy(&ValidationPolicy::engineering(), &complete()).is_valid());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let result = evaluate_policy(&ValidationPolicy::school(), &FormValues::default());
        assert_eq!(result.len(), 8);
        assert_eq!(
            result.message(FormField::StudentName),
            Some(MSG_STUDENT_NAME_REQUIRED)
        );
        assert_eq!(result.message(FormField::DemoDate), Some(MSG_DEMO_DATE_REQUIRED));
        assert!(result.get(FormField::InterestedOnline).is_none());
    }

    #[test]
    fn engineering_ignores_optional_fields() {
        let values = FormValues {
            student_name: "A".into(),
            contact_number: "1".into(),
            demo_date: "2024-07-01".into(),
            ..Default::default()
        };
        assert!(evaluate_policy(&ValidationPolicy::engineering(), &values).is_valid());
    }

    #[test]
    fn school_enforces_min_length() {
        let values = FormValues {
            student_name: "A".into(),
            ..complete()
        };
        let result = evaluate_policy(&ValidationPolicy::school(), &values);
        assert_eq!(result.len(), 1);
        let violation = result.get(FormField::StudentName).unwrap();
        assert_eq!(violation.rule_type, RuleType::MinLength);
        assert_eq!(violation.message, MSG_STUDENT_NAME_MIN);
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let values = FormValues {
            student_name: "Zoë".into(),
            ..complete()
        };
        assert!(evaluate_policy(&ValidationPolicy::school(), &values).is_valid());

        let values = FormValues {
            student_name: "é".into(),
            ..complete()
        };
        assert!(!evaluate_policy(&ValidationPolicy::school(), &values).is_valid());
    }

    #[test]
    fn unparseable_date_is_reported() {
        for raw in ["tomorrow", "2024-02-30", "01-07-2024"] {
            let values = FormValues {
                demo_date: raw.into(),
                ..complete()
            };
            let result = evaluate_policy(&ValidationPolicy::engineering(), &values);
            let violation = result.get(FormField::DemoDate).unwrap();
            assert_eq!(violation.rule_type, RuleType::DateFormat, "{raw}");
            assert_eq!(violation.message, MSG_DEMO_DATE_INVALID);
        }
    }

    #[test]
    fn selector_choice_never_fails() {
        for choice in [None, Some(true), Some(false)] {
            let values = FormValues {
                interested_online: choice,
                ..complete()
            };
            assert!(evaluate_policy(&ValidationPolicy::school(), &values).is_valid());
        }
    }

    #[test]
    fn required_boolean_rule_rejects_placeholder() {
        let policy = ValidationPolicy::new(
            Variant::School,
            vec![FieldRule::boolean(FormField::InterestedOnline).required("Pick one")],
        );
        let result = evaluate_policy(&policy, &FormValues::default());
        assert_eq!(result.message(FormField::InterestedOnline), Some("Pick one"));
    }

    #[test]
    fn filtered_keeps_selected_fields() {
        let result = evaluate_policy(&ValidationPolicy::school(), &FormValues::default());
        let visible = result.filtered(|f| f == FormField::Address);
        assert_eq!(visible.fields().collect::<Vec<_>>(), vec![FormField::Address]);
    }
}
