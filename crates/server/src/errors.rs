use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageResponse;
use service::auth::errors::AuthError;
use service::errors::ServiceError;
use tracing::error;

/// Error reply rendered as `{"message": ...}`. `detail` is logged, never sent.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, message: message.into(), detail }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, None)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message, None)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "request failed");
        }
        (self.status, Json(MessageResponse::new(self.message))).into_response()
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::DuplicateEmail => Self::bad_request(e.to_string()),
            AuthError::InvalidCredentials | AuthError::InvalidToken => Self::unauthorized(e.to_string()),
            AuthError::HashError(_) | AuthError::TokenError(_) | AuthError::Repository(_) => {
                Self::internal(format!("code={} {}", e.code(), e))
            }
        }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::BadInput(msg) | ServiceError::NotFound(msg) => Self::bad_request(msg),
            ServiceError::Db(_) | ServiceError::Model(_) => Self::internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(e: JsonRejection) -> Self {
        Self::bad_request(e.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_status() {
        assert_eq!(JsonApiError::from(AuthError::DuplicateEmail).status, StatusCode::BAD_REQUEST);
        assert_eq!(JsonApiError::from(AuthError::InvalidCredentials).status, StatusCode::UNAUTHORIZED);
        let hashing = JsonApiError::from(AuthError::HashError("salt".into()));
        assert_eq!(hashing.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(hashing.message, "Internal Server Error");
    }

    #[test]
    fn service_errors_keep_their_message() {
        let e = JsonApiError::from(ServiceError::not_found("Student"));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Student not found");
        let e = JsonApiError::from(ServiceError::Db("pool closed".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.detail.as_deref(), Some("database error: pool closed"));
    }
}
