//! Mapping of [`AppError`] onto HTTP responses.
//!
//! | variant      | status | body |
//! |--------------|--------|------|
//! | `Validation` | 400    | `{"message": "invalid input", "errors": [{"field", "message"}]}` |
//! | anything else| 500    | `{"message": "storage error"}` |
//!
//! A request body that is not valid JSON, or whose fields have the wrong
//! type, is rejected as a validation error on the offending field.
//!
//! Details of server-side failures are logged, never sent to the client.

use crate::errors::{AppError, ValidationErrors};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errs) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "invalid input",
                    "errors": errs,
                })),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "storage error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Prefix axum puts in front of serde's "path: error" text.
const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        let (field, message) = match &rejection {
            JsonRejection::JsonDataError(_) => field_of_data_error(&text),
            _ => ("body".to_string(), text.clone()),
        };
        AppError::Validation(ValidationErrors::single(&field, message))
    }
}

/// Split "joinNewsletter: invalid type: ..." into the serde path and the
/// reason. Errors at the document root carry no path.
fn field_of_data_error(text: &str) -> (String, String) {
    let detail = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(text);
    match detail.split_once(": ") {
        Some((path, reason)) if !path.is_empty() && !path.contains(char::is_whitespace) => {
            (path.to_string(), reason.to_string())
        }
        _ => ("body".to_string(), detail.to_string()),
    }
}

pub(crate) fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("{what} not found") })),
    )
        .into_response()
}
