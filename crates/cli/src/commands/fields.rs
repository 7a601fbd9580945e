//! `intake fields` and `intake policy`

use serde::Serialize;
use tabled::Tabled;

use intake_core::validation::FieldKind;
use intake_core::{SearchField, Variant};

use crate::output::OutputFormat;

#[derive(Serialize, Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
}

#[derive(Serialize, Tabled)]
struct RuleRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Required")]
    required: &'static str,
    #[tabled(rename = "Checks")]
    checks: String,
}

pub fn handle(format: OutputFormat) {
    let rows: Vec<FieldRow> = SearchField::ALL
        .into_iter()
        .map(|field| FieldRow {
            field: field.as_str(),
            label: field.label(),
        })
        .collect();
    format.print_rows(&rows);
}

pub fn policy(variant: Variant, format: OutputFormat) {
    let policy = variant.policy();
    let rows: Vec<RuleRow> = policy
        .rules()
        .iter()
        .map(|rule| {
            let mut checks = Vec::new();
            if let Some(message) = &rule.required {
                checks.push(format!("required ({message})"));
            }
            if let Some((min, message)) = &rule.min_length {
                checks.push(format!("min {min} chars ({message})"));
            }
            if let Some(message) = &rule.invalid_date {
                checks.push(format!("YYYY-MM-DD ({message})"));
            }

            RuleRow {
                field: rule.field.as_str(),
                kind: match rule.kind {
                    FieldKind::Text => "text",
                    FieldKind::Date => "date",
                    FieldKind::Boolean => "yes/no",
                },
                required: if rule.is_required() { "Yes" } else { "No" },
                checks: checks.join("; "),
            }
        })
        .collect();

    if let OutputFormat::Table = format {
        println!("{}", variant.title());
    }
    format.print_rows(&rows);
}
