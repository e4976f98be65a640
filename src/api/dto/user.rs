//! DTOs for the user endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::User;
use crate::utils::date::parse_dob;

/// Request body for `POST /users`.
///
/// Absent and `null` fields deserialize as empty strings so they are reported by
/// validation instead of as malformed JSON.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_dob"))]
    pub dob: String,
}

/// Request body for `PUT /users/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_dob"))]
    pub dob: String,
}

/// User as returned by the API.
///
/// `age` is only filled in by the read endpoints (get and list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub dob: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl UserResponse {
    pub fn with_age(user: User, age: u32) -> Self {
        Self {
            age: Some(age),
            ..Self::from(user)
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            dob: user.dob,
            age: None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_dob(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required").with_message("dob is required".into()));
    }

    parse_dob(value).map(|_| ()).map_err(|e| {
        ValidationError::new("dob").with_message(e.to_string().into())
    })
}
