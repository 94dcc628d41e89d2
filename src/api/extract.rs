//! JSON body extractor that reports failures in the application error taxonomy.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// Deserializes a JSON body and runs its `validator` rules.
///
/// # Rejections
///
/// - Missing or non-JSON `Content-Type` → [`AppError::UnsupportedContentType`] (415)
/// - Body over the request size limit → [`AppError::PayloadTooLarge`] (413)
/// - Malformed JSON, wrong field types, failed validation → [`AppError::InvalidInput`] (400)
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(_) => AppError::unsupported_content_type(
                    format!("Unsupported Content-Type: {content_type:?}"),
                    json!({ "expected": "application/json" }),
                ),
                other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                    AppError::payload_too_large(
                        "Request body is too large",
                        json!({ "reason": other.body_text() }),
                    )
                }
                other => AppError::bad_request(
                    "Failed to parse request body",
                    json!({ "reason": other.body_text() }),
                ),
            })?;

        value.validate()?;

        Ok(Self(value))
    }
}
