//! Request extractors that reject with [`AppError`] instead of axum's defaults.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// The `{id}` path segment parsed as a base-10 `i64`.
///
/// Anything else (non-numeric, out of range, missing) is rejected with
/// `400 {"error": "invalid id"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation("invalid id"))?;

        raw.parse::<i64>()
            .map(UserId)
            .map_err(|_| AppError::validation("invalid id"))
    }
}

/// JSON body that has been deserialized and then checked with [`Validate`].
///
/// # Rejections
///
/// - Body is not JSON of the expected shape: `400 {"error": "invalid JSON"}`
/// - Field constraints fail: `400 {"error": "<validation errors>"}`
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                AppError::validation("invalid JSON")
            })?;

        value
            .validate()
            .map_err(|errors| AppError::validation(errors.to_string()))?;

        Ok(Self(value))
    }
}
