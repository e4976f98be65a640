//! User management service.

use std::sync::Arc;

use crate::api::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::domain::age::calculate_age;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::{NewUser, UpdateUser};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::date::parse_dob;

/// Service implementing the user CRUD operations.
///
/// Parses dates of birth, derives ages for the read operations and maps stored
/// users to [`UserResponse`]. Every call is a single repository round trip; no
/// retries and no transactions.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl UserService {
    /// Creates a service that reads the current date from the system clock.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self::with_clock(repository, Arc::new(SystemClock))
    }

    pub fn with_clock(repository: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Creates a user. The response carries no age.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `dob` is not a `YYYY-MM-DD` date.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn create(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        let dob = parse_dob(&request.dob)?;

        let user = self
            .repository
            .create(NewUser {
                name: request.name,
                dob,
            })
            .await?;

        tracing::debug!(user_id = user.id, "user created");

        Ok(UserResponse::from(user))
    }

    /// Fetches one user with its age as of today.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn get(&self, id: i64) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("user not found"))?;

        let age = calculate_age(user.dob, self.clock.today());

        Ok(UserResponse::with_age(user, age))
    }

    /// Lists all users with their ages.
    ///
    /// Today's date is read once, so every age in the result refers to the same
    /// day even if the response straddles midnight.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn list(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.repository.list().await?;
        let today = self.clock.today();

        Ok(users
            .into_iter()
            .map(|user| {
                let age = calculate_age(user.dob, today);
                UserResponse::with_age(user, age)
            })
            .collect())
    }

    /// Replaces a user's name and date of birth. The response carries no age.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `dob` is not a `YYYY-MM-DD` date.
    /// Returns [`AppError::NotFound`] if no user has this id.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        let dob = parse_dob(&request.dob)?;

        let user = self
            .repository
            .update(
                id,
                UpdateUser {
                    name: request.name,
                    dob,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("user not found"))?;

        Ok(UserResponse::from(user))
    }

    /// Deletes a user. Deleting an id that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            tracing::debug!(user_id = id, "delete matched no user");
        }

        Ok(())
    }
}
