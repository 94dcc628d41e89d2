//! Handlers for creating and resolving short links.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, Uri},
};
use serde_json::json;

use crate::api::dto::shorten::ShortenRequest;
use crate::api::extract::ValidatedJson;
use crate::domain::entities::Record;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL and stores the resulting record.
///
/// # Endpoint
///
/// `POST /shorten` with `Content-Type: application/json`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.example.com/some/long/url" }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record:
///
/// ```json
/// {
///   "id": "5f0c3a9e1b2d4c6e8f0a1b2c",
///   "url": "https://www.example.com/some/long/url",
///   "shortCode": "aB3-x=",
///   "createdAt": "2021-09-01T12:00:00.000Z",
///   "updatedAt": "2021-09-01T12:00:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is not valid JSON or `url` is missing/empty
/// - 415 if the content type is not JSON
/// - 500 if the store fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ShortenRequest>,
) -> Result<(StatusCode, Json<Record>), AppError> {
    let record = state.record_service.shorten(payload.url).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Returns the record stored under a short code.
///
/// # Endpoint
///
/// `GET /shorten/{shortCode}`
///
/// # Errors
///
/// - 400 if the path segment cannot be decoded
/// - 404 if no record has that short code
/// - 500 if the store fails
pub async fn get_record_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Record>, AppError> {
    let Path(short_code) = path.map_err(|rejection| {
        AppError::bad_request(
            "Invalid URL path format",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let record = state.record_service.resolve(&short_code).await?;

    Ok(Json(record))
}

/// Rejects `GET /shorten/` where the short code segment is empty.
pub async fn missing_code_handler() -> AppError {
    AppError::bad_request(
        "Invalid URL path format: short code is empty",
        json!({ "path": "/shorten/" }),
    )
}

/// Answers requests that match no route.
///
/// Paths under `/shorten/` that the `{shortCode}` route cannot match, such as
/// `/shorten//` or `/shorten/a/b`, carry an empty or malformed short code and get
/// 400. Everything else gets 404.
pub async fn unmatched_path_handler(uri: Uri) -> AppError {
    let path = uri.path();

    if path.starts_with("/shorten/") {
        AppError::bad_request(
            "Invalid URL path format: malformed short code",
            json!({ "path": path }),
        )
    } else {
        AppError::not_found("No route for the requested path", json!({ "path": path }))
    }
}
