//! # Portal Core
//!
//! The domain layer of the portal client.
//! Session state, login-state gating and client-side form validation live here,
//! with storage reached only through the [`ports::Storage`] trait.

pub mod domain;
pub mod error;
pub mod guard;
pub mod ports;
pub mod session;
pub mod validation;

pub use error::{SessionError, ValidationError};
pub use session::SessionStore;
