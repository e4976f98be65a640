//! Handlers for user management endpoints.

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::api::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::api::extract::{UserId, ValidatedJson};
use crate::api::middleware::request_id::RequestId;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Errors
///
/// Returns 400 for malformed JSON, a name outside 1-255 characters, or a `dob`
/// that is not a `YYYY-MM-DD` date.
/// Returns 500 on database errors.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .user_service
        .create(payload)
        .await
        .map_err(|e| e.report(&request_id, "create user"))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Fetches a user, including its current age.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 404 if no user has this id, and also when the lookup itself fails
/// (the storage error is logged, not returned).
pub async fn get_user_handler(
    UserId(id): UserId,
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .user_service
        .get(id)
        .await
        .map_err(|e| e.report(&request_id, "get user").or_not_found("user not found"))?;

    Ok(Json(user))
}

/// Lists all users with their ages.
///
/// # Endpoint
///
/// `GET /users`
pub async fn list_users_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state
        .user_service
        .list()
        .await
        .map_err(|e| e.report(&request_id, "list users"))?;

    Ok(Json(users))
}

/// Replaces a user's name and date of birth.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// # Errors
///
/// Returns 400 for an invalid id, malformed JSON or failed validation.
/// Returns 500 on database errors or if no user has this id.
pub async fn update_user_handler(
    UserId(id): UserId,
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .user_service
        .update(id, payload)
        .await
        .map_err(|e| e.report(&request_id, "update user").or_internal("update user"))?;

    Ok(Json(user))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// Deleting an id that does not exist also returns 204.
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 500 on database errors.
pub async fn delete_user_handler(
    UserId(id): UserId,
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Result<StatusCode, AppError> {
    state
        .user_service
        .delete(id)
        .await
        .map_err(|e| e.report(&request_id, "delete user"))?;

    Ok(StatusCode::NO_CONTENT)
}
