use thiserror::Error;

/// API call failures.
///
/// `Request` carries only the user-facing message; the HTTP status is not
/// exposed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response or transport failure.
    #[error("{0}")]
    Request(String),

    /// Response body was not the JSON the caller expected.
    #[error("Invalid response from server: {0}")]
    Parse(String),

    #[error("Failed to encode request body: {0}")]
    Encode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Request(err.to_string())
    }
}
