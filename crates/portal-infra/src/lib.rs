//! # Portal Infrastructure
//!
//! Concrete implementations behind the ports defined in `portal-core`,
//! plus the HTTP client for the authentication API.

pub mod api;
pub mod storage;

pub use api::{ApiClient, ApiError};
pub use storage::{FileStorage, InMemoryStorage};
