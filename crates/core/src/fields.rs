//! Closed field enumerations for the intake form and the retrieval search.
//!
//! The form speaks camelCase (the submission payload keys) while the
//! retrieval endpoint speaks snake_case column names. Both sets are closed:
//! parsing an unknown name is a [`CoreError`], never a silent pass.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Form fields
// ---------------------------------------------------------------------------

/// One input of the feedback form.
///
/// Declaration order is display order; validation results are keyed and
/// iterated in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    StudentName,
    FatherDetails,
    MotherDetails,
    ContactNumber,
    Address,
    SchoolName,
    InterestedOnline,
    DemoDate,
    SalesRefName,
}

impl FormField {
    /// Every form field, in display order.
    pub const ALL: [FormField; 9] = [
        FormField::StudentName,
        FormField::FatherDetails,
        FormField::MotherDetails,
        FormField::ContactNumber,
        FormField::Address,
        FormField::SchoolName,
        FormField::InterestedOnline,
        FormField::DemoDate,
        FormField::SalesRefName,
    ];

    /// Field name as used by callers and in validation output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StudentName => "studentName",
            Self::FatherDetails => "fatherDetails",
            Self::MotherDetails => "motherDetails",
            Self::ContactNumber => "contactNumber",
            Self::Address => "address",
            Self::SchoolName => "schoolName",
            Self::InterestedOnline => "interestedOnline",
            Self::DemoDate => "demoDate",
            Self::SalesRefName => "salesRefName",
        }
    }

    /// Placeholder / prompt text shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::StudentName => "Student Name",
            Self::FatherDetails => "Father Name & Profession",
            Self::MotherDetails => "Mother Name & Profession",
            Self::ContactNumber => "Parent Contact Number",
            Self::Address => "Residing Address",
            Self::SchoolName => "School or College Name",
            Self::InterestedOnline => "Interested in Online Course?",
            Self::DemoDate => "Demo Date",
            Self::SalesRefName => "Sales Reference Name",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = CoreError;

    /// Accepts the camelCase name. `schoolname` is accepted too since that
    /// is the key the storage API uses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "schoolname" {
            return Ok(Self::SchoolName);
        }
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Search fields
// ---------------------------------------------------------------------------

/// Column a retrieval query may match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    StudentName,
    FatherDetails,
    MotherDetails,
    ContactNumber,
    Address,
    SchoolName,
    InterestedOnline,
    DemoDate,
    SalesRefName,
}

impl SearchField {
    pub const ALL: [SearchField; 9] = [
        SearchField::StudentName,
        SearchField::FatherDetails,
        SearchField::MotherDetails,
        SearchField::ContactNumber,
        SearchField::Address,
        SearchField::SchoolName,
        SearchField::InterestedOnline,
        SearchField::DemoDate,
        SearchField::SalesRefName,
    ];

    /// Value sent as the `field` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StudentName => "student_name",
            Self::FatherDetails => "father_details",
            Self::MotherDetails => "mother_details",
            Self::ContactNumber => "contact_number",
            Self::Address => "address",
            Self::SchoolName => "school_name",
            Self::InterestedOnline => "interested_online",
            Self::DemoDate => "demo_date",
            Self::SalesRefName => "sales_ref_name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StudentName => "Student Name",
            Self::FatherDetails => "Father Name & Profession",
            Self::MotherDetails => "Mother Name & Profession",
            Self::ContactNumber => "Contact Number",
            Self::Address => "Address",
            Self::SchoolName => "School/College Name",
            Self::InterestedOnline => "Interested in Online Course",
            Self::DemoDate => "Demo Date",
            Self::SalesRefName => "Sales Reference Name",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSearchField(s.to_string()))
    }
}
