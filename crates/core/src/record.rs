//! Feedback record shapes: the editable form values, the submission
//! payload, and the rows returned by the retrieval endpoint.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;
use crate::fields::FormField;

/// Date format accepted from the date input and sent on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a demo date as entered (`YYYY-MM-DD`, surrounding whitespace ignored).
pub fn parse_demo_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Coerce the online-interest selector input.
///
/// The empty string is the selector's placeholder and maps to `None`.
pub fn parse_tri_state(raw: &str) -> Result<Option<bool>, CoreError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "true" | "yes" | "y" => Ok(Some(true)),
        "false" | "no" | "n" => Ok(Some(false)),
        other => Err(CoreError::InvalidInput {
            field: FormField::InterestedOnline.as_str(),
            reason: format!("expected yes/no, got {other:?}"),
        }),
    }
}

// ---------------------------------------------------------------------------
// Form values
// ---------------------------------------------------------------------------

/// The current contents of an intake form.
///
/// Text inputs hold exactly what was typed; the demo date stays raw until
/// validation so an unparseable entry can be reported against the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub student_name: String,
    pub father_details: String,
    pub mother_details: String,
    pub contact_number: String,
    pub address: String,
    pub school_name: String,
    /// `None` while the selector sits on its placeholder.
    pub interested_online: Option<bool>,
    pub demo_date: String,
    pub sales_ref_name: String,
}

impl FormValues {
    /// Raw text of a text or date field. `None` for the online-interest
    /// selector, which is not a text input.
    pub fn text(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::StudentName => &self.student_name,
            FormField::FatherDetails => &self.father_details,
            FormField::MotherDetails => &self.mother_details,
            FormField::ContactNumber => &self.contact_number,
            FormField::Address => &self.address,
            FormField::SchoolName => &self.school_name,
            FormField::InterestedOnline => return None,
            FormField::DemoDate => &self.demo_date,
            FormField::SalesRefName => &self.sales_ref_name,
        };
        Some(value.as_str())
    }

    /// Set a field from raw input text.
    ///
    /// Text fields store the input verbatim; the online-interest selector
    /// is coerced through [`parse_tri_state`].
    pub fn set(&mut self, field: FormField, raw: &str) -> Result<(), CoreError> {
        let slot = match field {
            FormField::StudentName => &mut self.student_name,
            FormField::FatherDetails => &mut self.father_details,
            FormField::MotherDetails => &mut self.mother_details,
            FormField::ContactNumber => &mut self.contact_number,
            FormField::Address => &mut self.address,
            FormField::SchoolName => &mut self.school_name,
            FormField::InterestedOnline => {
                self.interested_online = parse_tri_state(raw)?;
                return Ok(());
            }
            FormField::DemoDate => &mut self.demo_date,
            FormField::SalesRefName => &mut self.sales_ref_name,
        };
        *slot = raw.to_string();
        Ok(())
    }

    /// Build the submission payload.
    ///
    /// Fails only when the demo date does not parse, which validation
    /// reports first for every built-in policy.
    pub fn to_submission(&self) -> Result<FeedbackSubmission, CoreError> {
        let demo_date = parse_demo_date(&self.demo_date).ok_or_else(|| CoreError::InvalidInput {
            field: FormField::DemoDate.as_str(),
            reason: format!("{:?} is not a YYYY-MM-DD date", self.demo_date),
        })?;

        Ok(FeedbackSubmission {
            student_name: self.student_name.clone(),
            father_details: self.father_details.clone(),
            mother_details: self.mother_details.clone(),
            contact_number: self.contact_number.clone(),
            address: self.address.clone(),
            school_name: self.school_name.clone(),
            interested_online: self.interested_online.unwrap_or(false),
            demo_date,
            sales_ref_name: self.sales_ref_name.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Submission payload
// ---------------------------------------------------------------------------

/// JSON body of `POST /feedback/{variant}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub student_name: String,
    pub father_details: String,
    pub mother_details: String,
    pub contact_number: String,
    pub address: String,
    #[serde(rename = "schoolname")]
    pub school_name: String,
    pub interested_online: bool,
    pub demo_date: NaiveDate,
    pub sales_ref_name: String,
}

// ---------------------------------------------------------------------------
// Retrieved record
// ---------------------------------------------------------------------------

/// Server-assigned record identifier; numeric or textual depending on the
/// storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One row of `GET /retrieve/feedback/{variant}`.
///
/// Optional columns tolerate both `null` and absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: RecordId,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub father_details: Option<String>,
    #[serde(default)]
    pub mother_details: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default, deserialize_with = "truthy")]
    pub interested_online: Option<bool>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub demo_date: Option<DemoDate>,
    #[serde(default)]
    pub sales_ref_name: Option<String>,
}

impl FeedbackRecord {
    /// Online interest as shown in the results table.
    pub fn interested_online_label(&self) -> &'static str {
        if self.interested_online.unwrap_or(false) {
            "Yes"
        } else {
            "No"
        }
    }
}

/// Accept booleans, 0/1 and "true"/"false" strings (SQL backends differ).
fn truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::Bool(b)) => Some(b),
        Some(serde_json::Value::Number(n)) => Some(n.as_f64().is_some_and(|n| n != 0.0)),
        Some(serde_json::Value::String(s)) => {
            Some(matches!(s.to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
        }
        Some(_) => Some(true),
    })
}

/// Accept any string (or `null`) for a row's demo date; see [`DemoDate::parse`].
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DemoDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(raw)) if raw.is_empty() => None,
        Some(serde_json::Value::String(raw)) => Some(DemoDate::parse(&raw)),
        Some(other) => Some(DemoDate::Raw(other.to_string())),
    })
}

/// Demo date of a retrieved row.
///
/// Storage backends disagree on date columns, so anything that is not a
/// recognisable date is kept as sent rather than failing the whole result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DemoDate {
    Date(NaiveDate),
    Raw(String),
}

impl DemoDate {
    /// Recognises `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` and RFC 3339; the
    /// time part is dropped.
    pub fn parse(raw: &str) -> Self {
        if let Some(date) = parse_demo_date(raw) {
            return Self::Date(date);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%d %H:%M:%S%.f") {
            return Self::Date(dt.date());
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
            return Self::Date(dt.date_naive());
        }
        Self::Raw(raw.to_string())
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Raw(_) => None,
        }
    }
}

impl From<NaiveDate> for DemoDate {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl fmt::Display for DemoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for DemoDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DemoDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
