use std::fmt;
use std::time::Duration;

/// Pages the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "login.html",
            Route::Register => "register.html",
            Route::Dashboard => "dashboard.html",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A navigation request returned by a page handler.
///
/// Handlers never navigate themselves; the shell performs the redirect once
/// `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub route: Route,
    pub delay: Duration,
}

impl Redirect {
    /// Delay before showing the dashboard after a successful login.
    pub const LOGIN_DELAY: Duration = Duration::from_secs(1);
    /// Delay before showing the login page after a successful registration.
    pub const REGISTER_DELAY: Duration = Duration::from_secs(2);

    pub fn immediate(route: Route) -> Self {
        Self {
            route,
            delay: Duration::ZERO,
        }
    }

    pub fn after(route: Route, delay: Duration) -> Self {
        Self { route, delay }
    }
}
