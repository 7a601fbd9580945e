//! Form variants and their endpoint suffixes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::ValidationPolicy;

/// Which intake form a controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    School,
    Engineering,
}

impl Variant {
    /// Path segment after `/feedback/` on the submit endpoint.
    pub fn endpoint_suffix(self) -> &'static str {
        match self {
            Self::School => "school",
            Self::Engineering => "eng",
        }
    }

    /// Form heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::School => "Student Feedback Form",
            Self::Engineering => "Student Feedback Form Engineering",
        }
    }

    /// The built-in validation policy for this variant.
    pub fn policy(self) -> ValidationPolicy {
        match self {
            Self::School => ValidationPolicy::school(),
            Self::Engineering => ValidationPolicy::engineering(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::School => f.write_str("school"),
            Self::Engineering => f.write_str("engineering"),
        }
    }
}

impl FromStr for Variant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "school" => Ok(Self::School),
            "eng" | "engineering" => Ok(Self::Engineering),
            _ => Err(CoreError::UnknownVariant(s.to_string())),
        }
    }
}
