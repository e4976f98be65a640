//! Age derivation from a date of birth.

use chrono::{Datelike, NaiveDate};

/// Returns the number of full years between `dob` and `today`.
///
/// A year only counts once the birthday (month and day) has been reached in
/// `today`'s year. Feb 29 birthdays are compared by month/day like any other, so in
/// non-leap years they are reached on Mar 1.
///
/// A `dob` after `today` yields `0` rather than a negative age.
pub fn calculate_age(dob: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - dob.year();

    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }

    u32::try_from(years).unwrap_or(0)
}
