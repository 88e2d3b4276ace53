//! Custom Axum extractors
//!
//! Both extractors reject with [`ApiError`] so malformed paths and bodies
//! come back as JSON validation errors rather than plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde_json::Value;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate an integer id from path
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || {
            ApiError::from(ValidationError::InvalidFormat {
                field: "id",
                reason: "Not a valid integer.",
            })
        };

        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("rejected path id: {}", rejection);
                invalid()
            })?;

        let id = id.parse::<i64>().map_err(|_| invalid())?;

        Ok(Self(id))
    }
}

/// Extract a JSON body as an untyped record for schema validation
pub struct JsonRecord(pub Value);

impl<S> FromRequest<S> for JsonRecord
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("rejected request body: {}", rejection);
                ApiError::from(ValidationError::MalformedBody)
            })?;

        Ok(Self(value))
    }
}
