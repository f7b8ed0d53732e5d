//! Translation of task errors into HTTP responses.

use crate::error::{FieldViolation, TaskError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use heck::ToShoutySnakeCase;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Reason phrase in upper snake case, e.g. `NOT_FOUND`.
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldViolation>,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status_name(status),
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

/// `StatusCode::NOT_FOUND` -> `"NOT_FOUND"`.
pub fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(|reason| reason.to_shouty_snake_case())
        .unwrap_or_else(|| status.as_str().to_string())
}

pub fn status_for(err: &TaskError) -> StatusCode {
    match err {
        TaskError::NotFound(_) => StatusCode::NOT_FOUND,
        TaskError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        TaskError::IdentityMissing
        | TaskError::IdentityConflict { .. }
        | TaskError::InvalidRequest(_)
        | TaskError::Validation(_)
        | TaskError::MalformedBody(_)
        | TaskError::StoreUsage(_) => StatusCode::BAD_REQUEST,
        TaskError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        let message = self.to_string();

        if status.is_server_error() {
            error!(error_code = ?self.code(), error = %message, "Request failed");
        } else {
            warn!(error_code = ?self.code(), error_message = %message, "Request rejected");
        }

        let mut body = ErrorBody::new(status, message);
        body.errors = self.violations().to_vec();

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names_are_upper_snake_case() {
        assert_eq!(status_name(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(status_name(StatusCode::BAD_REQUEST), "BAD_REQUEST");
        assert_eq!(
            status_name(StatusCode::UNSUPPORTED_MEDIA_TYPE),
            "UNSUPPORTED_MEDIA_TYPE"
        );
        assert_eq!(
            status_name(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL_SERVER_ERROR"
        );
    }

    #[test]
    fn errors_map_to_expected_statuses() {
        assert_eq!(status_for(&TaskError::NotFound(1)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&TaskError::IdentityMissing),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&TaskError::IdentityConflict {
                path_id: 1,
                body_id: 2
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&TaskError::null_id()), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&TaskError::UnsupportedMediaType("no json".into())),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            status_for(&TaskError::StoreUsage("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&TaskError::Database(anyhow::anyhow!("boom"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_body_omits_empty_violations() {
        let body = ErrorBody::new(StatusCode::NOT_FOUND, "There is no task with id = 1");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "NOT_FOUND");
        assert!(json.get("errors").is_none());
    }
}
