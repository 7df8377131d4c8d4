//! # Portal Shared
//!
//! Wire types of the authentication HTTP API.
//! Request bodies the client sends and response bodies it reads back.

pub mod dto;
pub mod response;

pub use response::{ErrorBody, HealthResponse};
