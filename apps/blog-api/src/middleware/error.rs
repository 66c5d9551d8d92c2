//! Error handling - maps failures onto `{message}` JSON responses.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::error::{DomainError, RepoError};
use blog_shared::ErrorResponse;

/// Application-level error type returned by every handler.
#[derive(Debug)]
pub enum AppError {
    NotFound {
        message: String,
        requested_id: String,
        available_ids: Vec<String>,
    },
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound {
                message,
                requested_id,
                ..
            } => write!(f, "{} (requested id: {:?})", message, requested_id),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound {
                message,
                requested_id,
                available_ids,
            } => ErrorResponse::not_found(message, requested_id, available_ids.clone()),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Internal(detail) => {
                // Storage details stay in the logs.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound {
                entity_type,
                requested_id,
                available_ids,
            } => AppError::NotFound {
                message: format!("{} not found", entity_type),
                requested_id,
                available_ids,
            },
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Store(e) => e.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound {
                message: "Resource not found".to_string(),
                requested_id: String::new(),
                available_ids: Vec::new(),
            },
            RepoError::Constraint(msg) => AppError::BadRequest(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
