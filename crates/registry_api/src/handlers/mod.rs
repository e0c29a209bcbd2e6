pub mod auth;
pub mod documents;
pub mod health;
pub mod insights;
pub mod notifications;
pub mod stats;
pub mod trainers;
pub mod verify;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use registry_core::error::Error;
use serde_json::json;

pub use health::health_check;

/// Maps domain errors onto HTTP statuses. Anything unexpected is logged
/// server-side and reported as a bare 500.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.0.to_string()),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            Error::Conflict(_) => (StatusCode::CONFLICT, self.0.to_string()),
            Error::Busy => (StatusCode::CONFLICT, self.0.to_string()),
            Error::Auth => (StatusCode::UNAUTHORIZED, self.0.to_string()),
            Error::SchemaMissing => (StatusCode::SERVICE_UNAVAILABLE, self.0.to_string()),
            other => {
                tracing::error!("request failed: {:?}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_the_expected_statuses() {
        let cases = [
            (Error::Validation("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (Error::NotFound("x".into()), StatusCode::NOT_FOUND),
            (Error::Busy, StatusCode::CONFLICT),
            (Error::Auth, StatusCode::UNAUTHORIZED),
            (Error::SchemaMissing, StatusCode::SERVICE_UNAVAILABLE),
            (Error::Database("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError(err).into_response().status(), expected);
        }
    }
}
