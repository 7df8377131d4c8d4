//! Client-side form validation, run before any request is sent.

use crate::error::ValidationError;

/// Characters accepted as "special" by the password strength check.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Check password strength.
///
/// Rules are applied in a fixed order and the first failure wins:
/// length, uppercase, lowercase, digit, special character.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::MissingDigit);
    }
    if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(ValidationError::MissingSpecialCharacter);
    }
    Ok(())
}

/// Login form: both fields must be non-empty. `email` is expected trimmed.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// Register form fields, already trimmed (except the passwords).
#[derive(Debug, Clone, Copy)]
pub struct RegistrationFields<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub role: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Register form checks, in order: required fields, confirmation match,
/// password strength, username length.
pub fn validate_registration(fields: &RegistrationFields<'_>) -> Result<(), ValidationError> {
    let required = [
        ("First name", fields.first_name),
        ("Last name", fields.last_name),
        ("Username", fields.username),
        ("Email", fields.email),
        ("Role", fields.role),
        ("Password", fields.password),
    ];
    if let Some((name, _)) = required.into_iter().find(|(_, value)| value.is_empty()) {
        return Err(ValidationError::MissingField(name));
    }

    if fields.password != fields.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    validate_password(fields.password)?;

    if fields.username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooShort);
    }

    Ok(())
}
