//! The `DD/MM/YYYY` representation used for movie release dates on the wire.
//!
//! [`serialize`] is meant for `#[serde(serialize_with = "...")]` on a
//! `NaiveDate` field.

use chrono::NaiveDate;
use serde::Serializer;

use crate::error::CoreError;

/// `strftime`-style pattern for the external date format.
pub const FORMAT: &str = "%d/%m/%Y";

/// Parse a `DD/MM/YYYY` string.
pub fn parse(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input.trim(), FORMAT).map_err(|e| {
        CoreError::Validation(format!(
            "release_date '{input}' is not a valid DD/MM/YYYY date: {e}"
        ))
    })
}

pub fn render(date: &NaiveDate) -> String {
    date.format(FORMAT).to_string()
}

pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(FORMAT))
}
