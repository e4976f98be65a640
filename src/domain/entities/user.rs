//! Domain entity representing a stored user.

use chrono::NaiveDate;

/// A user row as stored in the database.
///
/// `id` is assigned by storage and never changes; `name` and `dob` can be
/// replaced through an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub dob: NaiveDate,
}

impl User {
    pub fn new(id: i64, name: String, dob: NaiveDate) -> Self {
        Self { id, name, dob }
    }
}

/// Input data for inserting a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub dob: NaiveDate,
}

/// Replacement values for an existing user.
///
/// Both fields are always written; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub name: String,
    pub dob: NaiveDate,
}
