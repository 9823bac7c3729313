//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("database: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    pub fn item_not_found() -> Self {
        AppError::NotFound("Item not found".into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client. Storage causes stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(m) | AppError::NotFound(m) | AppError::PayloadTooLarge(m) => m.clone(),
            AppError::Storage(_) => "Database error occurred".into(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_per_kind() {
        assert_eq!(AppError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::item_not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::PayloadTooLarge("too big".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::Storage(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn storage_cause_is_not_exposed() {
        let err = AppError::Storage(sqlx::Error::Protocol("disk I/O error at page 7".into()));
        assert_eq!(err.public_message(), "Database error occurred");
    }

    #[test]
    fn config_error_names_the_key() {
        let err = ConfigError::Invalid {
            key: "PORT",
            reason: "not a number".into(),
        };
        assert_eq!(err.to_string(), "invalid PORT: not a number");
    }
}
