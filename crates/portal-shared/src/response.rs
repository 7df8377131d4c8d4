//! Response bodies shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Message used when a failed response carries no `error` text.
pub const GENERIC_ERROR: &str = "Request failed";

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// User-facing message for a failed response body.
    ///
    /// Falls back to [`GENERIC_ERROR`] when the body is not an object or its
    /// `error` field is missing, empty or not a string.
    pub fn message_from(body: &serde_json::Value) -> String {
        body.get("error")
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_ERROR)
            .to_string()
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}
