//! HTTP client for the authentication API.

mod client;
mod error;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use reqwest::Method;
