//! Domain-level error types.

use thiserror::Error;

/// Client-side form validation failures. Reported before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both email and password")]
    MissingCredentials,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must contain at least one digit")]
    MissingDigit,

    #[error("Password must contain at least one special character")]
    MissingSpecialCharacter,

    #[error("Username must be at least 3 characters long")]
    UsernameTooShort,
}

/// Session read failures.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The stored user profile is not valid JSON for a profile.
    #[error("Stored user profile is corrupt: {0}")]
    Deserialization(#[from] serde_json::Error),
}
