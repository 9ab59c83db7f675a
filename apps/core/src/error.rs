use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, warn};

/// Errors raised by a sentiment classifier backend.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    /// The classifier could not be reached.
    #[error("Sentiment classifier unavailable: {0}")]
    Unavailable(String),

    /// The classifier answered with a non-success status.
    #[error("Sentiment classifier returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The classifier answered, but not with a usable label and score.
    #[error("Malformed classifier response: {0}")]
    MalformedResponse(String),

    /// The classifier did not answer within the configured timeout.
    #[error("Sentiment classifier timed out after {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for ClassifierError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClassifierError::MalformedResponse(err.to_string())
        } else {
            ClassifierError::Unavailable(err.to_string())
        }
    }
}

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents failures of the external sentiment classifier.
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// Represents request validation errors (e.g., empty journal text).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., missing environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Classifier(ClassifierError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Classifier(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ClassifierError::Unavailable("down".into())).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::from(ClassifierError::Timeout(Duration::from_secs(8))).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            AppError::Config("missing".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_classifier_error_messages() {
        let err = ClassifierError::Status {
            status: 503,
            body: "loading".into(),
        };
        assert_eq!(
            err.to_string(),
            "Sentiment classifier returned status 503: loading"
        );
    }
}
