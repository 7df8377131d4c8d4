//! Page handlers.
//!
//! Each handler turns one user action into at most one API call and returns
//! what the shell should do next. Handlers never print or navigate.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod register;

use portal_core::domain::Redirect;

use crate::shell::Banner;

/// What a page load resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Page<T> {
    /// Leave this page before rendering anything.
    Redirect(Redirect),
    Show(T),
}

/// A successful form submission: a success banner, then a delayed redirect.
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub banner: Banner,
    pub redirect: Redirect,
}
