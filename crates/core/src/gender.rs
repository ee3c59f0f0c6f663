//! Actor gender and its single-character storage code.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// Gender of an actor.
///
/// Serializes as `"Male"`, `"Female"` or `"Unknown"`. The `actors` table
/// stores it as a `CHAR(1)` code (`M`, `F`, `U`); see [`Gender::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    /// Normalize free-form client input.
    ///
    /// Matching is case-insensitive: `"male"` and `"female"` map to their
    /// variants, anything else (including no value at all) is `Unknown`.
    pub fn from_input(input: Option<&str>) -> Self {
        match input {
            Some(value) if value.eq_ignore_ascii_case("male") => Gender::Male,
            Some(value) if value.eq_ignore_ascii_case("female") => Gender::Female,
            _ => Gender::Unknown,
        }
    }

    /// Storage code written to the `gender` column.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unknown => "U",
        }
    }

    /// Decode a storage code read back from the `gender` column.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code.trim_end() {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            "U" => Ok(Gender::Unknown),
            other => Err(CoreError::Internal(format!(
                "unrecognised gender code '{other}'"
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unknown => "Unknown",
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = CoreError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Gender::from_code(&code)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
