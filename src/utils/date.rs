//! Strict calendar date parsing for `YYYY-MM-DD` input.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Wire format for dates of birth.
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Exactly four year digits, two month digits, two day digits.
///
/// chrono alone accepts unpadded fields such as `1990-5-1`.
static DOB_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Errors produced while parsing a date of birth.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DobError {
    #[error("dob must be formatted as YYYY-MM-DD, got '{0}'")]
    InvalidFormat(String),

    #[error("dob '{0}' is not a valid calendar date")]
    InvalidDate(String),
}

/// Parses a date of birth in strict `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns [`DobError::InvalidFormat`] when the string does not have the expected
/// shape and [`DobError::InvalidDate`] when it does but names no real day
/// (`2023-02-29`, `1990-13-01`).
pub fn parse_dob(value: &str) -> Result<NaiveDate, DobError> {
    if !DOB_SHAPE.is_match(value) {
        return Err(DobError::InvalidFormat(value.to_string()));
    }

    NaiveDate::parse_from_str(value, DOB_FORMAT).map_err(|_| DobError::InvalidDate(value.to_string()))
}
