//! Application-level errors - everything a page can show in its error banner.

use std::fmt;

use portal_core::{SessionError, ValidationError};
use portal_infra::ApiError;

/// Error surfaced to the user. `Display` is the bare banner message.
#[derive(Debug)]
pub enum AppError {
    /// Rejected before any request was sent.
    Validation(ValidationError),
    /// The request failed or its response was unusable.
    Api(ApiError),
    /// The stored session could not be read.
    Session(SessionError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "{}", err),
            AppError::Api(err) => write!(f, "{}", err),
            AppError::Session(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError::Api(err)
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        tracing::error!("Stored session is unreadable: {}", err);
        AppError::Session(err)
    }
}

/// Result type alias for page handlers.
pub type AppResult<T> = Result<T, AppError>;
