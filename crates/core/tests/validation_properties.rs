//! Integration tests for policy evaluation across both form variants.

use intake_core::validation::evaluate_policy;
use intake_core::{FormField, FormValues, ValidationPolicy, Variant};

fn complete() -> FormValues {
    FormValues {
        student_name: "Arjun Nair".into(),
        father_details: "Vijay, accountant".into(),
        mother_details: "Rekha, doctor".into(),
        contact_number: "9123456780".into(),
        address: "22 Park Street".into(),
        school_name: "Kendriya Vidyalaya".into(),
        interested_online: Some(true),
        demo_date: "2024-08-20".into(),
        sales_ref_name: "Neha".into(),
    }
}

fn blank(values: &mut FormValues, field: FormField) {
    values.set(field, "").expect("every field accepts empty input");
}

// ---------------------------------------------------------------------------
// Test: all required fields present means no errors
// ---------------------------------------------------------------------------

#[test]
fn required_fields_alone_are_enough() {
    for variant in [Variant::School, Variant::Engineering] {
        let policy = variant.policy();
        let mut values = complete();
        for field in FormField::ALL {
            if !policy.is_required(field) {
                blank(&mut values, field);
            }
        }
        let result = evaluate_policy(&policy, &values);
        assert!(result.is_valid(), "{variant}: {result:?}");
    }
}

// ---------------------------------------------------------------------------
// Test: a missing required field is reported alone
// ---------------------------------------------------------------------------

#[test]
fn missing_required_field_reports_only_that_field() {
    for variant in [Variant::School, Variant::Engineering] {
        let policy = variant.policy();
        for field in policy.required_fields() {
            let mut values = complete();
            blank(&mut values, field);

            let result = evaluate_policy(&policy, &values);
            assert_eq!(
                result.fields().collect::<Vec<_>>(),
                vec![field],
                "{variant}: blanking {field}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Test: optional fields never produce errors when blank
// ---------------------------------------------------------------------------

#[test]
fn blank_optional_field_is_not_an_error() {
    let policy = ValidationPolicy::engineering();
    for field in FormField::ALL {
        if policy.is_required(field) {
            continue;
        }
        let mut values = complete();
        blank(&mut values, field);
        assert!(evaluate_policy(&policy, &values).is_valid(), "{field}");
    }
}

// ---------------------------------------------------------------------------
// Test: validation output serializes as a field -> violation map
// ---------------------------------------------------------------------------

#[test]
fn result_serializes_keyed_by_field_name() {
    let mut values = complete();
    blank(&mut values, FormField::ContactNumber);
    let result = evaluate_policy(&ValidationPolicy::school(), &values);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["contactNumber"]["rule_type"], "required");
    assert_eq!(json["contactNumber"]["message"], "Contact Number is required");
}
