//! Output formatting

use clap::ValueEnum;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use intake_core::FeedbackRecord;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Print a single value. Tables have no shape for arbitrary values, so
    /// both formats render JSON.
    pub fn print<T: Serialize>(&self, data: &T) {
        match serde_json::to_string_pretty(data) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!(error = %e, "Failed to render output"),
        }
    }

    pub fn print_rows<T: Tabled + Serialize>(&self, rows: &[T]) {
        match self {
            OutputFormat::Json => self.print(&rows),
            OutputFormat::Table => println!("{}", Table::new(rows).with(Style::modern())),
        }
    }
}

/// One results-table row, with the column headings of the search page.
#[derive(Debug, Tabled)]
pub struct RecordRow {
    #[tabled(rename = "Name of the Student")]
    pub student_name: String,
    #[tabled(rename = "Father Name & Profession")]
    pub father_details: String,
    #[tabled(rename = "Mother Name & Profession")]
    pub mother_details: String,
    #[tabled(rename = "Contact Number")]
    pub contact_number: String,
    #[tabled(rename = "Residing Address")]
    pub address: String,
    #[tabled(rename = "School/College Name")]
    pub school_name: String,
    #[tabled(rename = "Interested in Online Course")]
    pub interested_online: &'static str,
    #[tabled(rename = "Demo Date")]
    pub demo_date: String,
    #[tabled(rename = "Sales Reference Name")]
    pub sales_ref_name: String,
}

impl From<&FeedbackRecord> for RecordRow {
    fn from(record: &FeedbackRecord) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            student_name: text(&record.student_name),
            father_details: text(&record.father_details),
            mother_details: text(&record.mother_details),
            contact_number: text(&record.contact_number),
            address: text(&record.address),
            school_name: text(&record.school_name),
            interested_online: record.interested_online_label(),
            demo_date: record
                .demo_date
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            sales_ref_name: text(&record.sales_ref_name),
        }
    }
}

/// Render retrieved records in server order.
pub fn print_records(records: &[FeedbackRecord], format: OutputFormat) {
    match format {
        OutputFormat::Json => format.print(&records),
        OutputFormat::Table if records.is_empty() => println!("No records found"),
        OutputFormat::Table => {
            let rows: Vec<RecordRow> = records.iter().map(RecordRow::from).collect();
            println!("{}", Table::new(rows).with(Style::modern()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use intake_core::{DemoDate, RecordId};

    fn record() -> FeedbackRecord {
        FeedbackRecord {
            id: RecordId::Number(7),
            student_name: Some("Asha Nair".into()),
            father_details: None,
            mother_details: None,
            contact_number: Some("9876543210".into()),
            address: None,
            school_name: Some("St. Mary".into()),
            interested_online: Some(true),
            demo_date: NaiveDate::from_ymd_opt(2024, 9, 14).map(DemoDate::Date),
            sales_ref_name: None,
        }
    }

    #[test]
    fn row_uses_yes_no_and_iso_date() {
        let row = RecordRow::from(&record());
        assert_eq!(row.interested_online, "Yes");
        assert_eq!(row.demo_date, "2024-09-14");
        assert_eq!(row.father_details, "");
    }

    #[test]
    fn unrecognised_date_renders_as_sent() {
        let row = RecordRow::from(&FeedbackRecord {
            demo_date: Some(DemoDate::Raw("15 June".into())),
            ..record()
        });
        assert_eq!(row.demo_date, "15 June");
    }

    #[test]
    fn unset_interest_renders_no() {
        let row = RecordRow::from(&FeedbackRecord {
            interested_online: None,
            ..record()
        });
        assert_eq!(row.interested_online, "No");
    }

    #[test]
    fn table_has_page_headings() {
        let rendered = Table::new([RecordRow::from(&record())]).to_string();
        assert!(rendered.contains("Name of the Student"));
        assert!(rendered.contains("Interested in Online Course"));
        assert!(rendered.contains("Asha Nair"));
    }
}
