use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dohgate_domain::DomainError;
use serde_json::json;
use tracing::{debug, warn};

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_caller_error() {
            debug!(error = %self.0, "Request rejected");
        } else {
            warn!(error = %self.0, "Request failed");
        }

        let (status, body) = match &self.0 {
            DomainError::UnknownResolver(_) => (
                StatusCode::NOT_FOUND,
                json!({ "error": self.0.to_string() }),
            ),

            DomainError::MalformedQuery(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.0.to_string() }),
            ),

            DomainError::Upstream(failure) => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": failure.to_string(), "status": failure.status }),
            ),

            DomainError::UnsupportedDialect(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.0.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
