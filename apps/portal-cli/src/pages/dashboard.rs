//! Dashboard page - protected.

use portal_core::domain::{Redirect, Route, UserProfile};
use portal_core::guard;

use super::Page;
use crate::error::AppResult;
use crate::state::AppState;

/// What the dashboard shows for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub name: String,
    pub username: String,
    pub email: String,
    pub role_badge: String,
}

impl From<&UserProfile> for DashboardView {
    fn from(user: &UserProfile) -> Self {
        Self {
            name: user.display_name(),
            username: user.username.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            role_badge: user.role.as_ref().map(|r| r.badge()).unwrap_or_default(),
        }
    }
}

/// Load the dashboard from the stored session.
///
/// A session without a stored profile shows nothing; a corrupt profile is an
/// error.
pub async fn load(state: &AppState) -> AppResult<Page<Option<DashboardView>>> {
    if let Some(redirect) = guard::protect_page(&state.session).await {
        return Ok(Page::Redirect(redirect));
    }

    let user = state.session.get_user().await?;
    Ok(Page::Show(user.as_ref().map(DashboardView::from)))
}

/// Fetch the profile from `GET /auth/me` instead of the stored copy.
pub async fn current_user(state: &AppState) -> AppResult<Page<DashboardView>> {
    if let Some(redirect) = guard::protect_page(&state.session).await {
        return Ok(Page::Redirect(redirect));
    }

    let user = state.api.current_user().await?;
    Ok(Page::Show(DashboardView::from(&user)))
}

/// Drop both session entries and go to the login page.
pub async fn logout(state: &AppState) -> Redirect {
    state.session.clear_session().await;
    tracing::debug!("Logged out");
    Redirect::immediate(Route::Login)
}
