//! Registration page.

use portal_core::domain::{Redirect, Route};
use portal_core::validation::{self, RegistrationFields};
use portal_core::guard;
use portal_shared::dto::RegisterRequest;

use super::Submitted;
use crate::error::AppResult;
use crate::shell::{Banner, SubmitButton};
use crate::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Request body: text fields trimmed, passwords exactly as typed.
    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role: self.role.clone(),
            password: self.password.clone(),
        }
    }
}

/// Already signed in visitors skip straight to the dashboard.
pub async fn enter(state: &AppState) -> Option<Redirect> {
    guard::redirect_if_logged_in(&state.session).await
}

/// Validate, then call `POST /auth/register`. No session is created.
pub async fn submit(
    state: &AppState,
    form: &RegisterForm,
    button: &mut SubmitButton,
) -> AppResult<Submitted> {
    let request = form.to_request();
    validation::validate_registration(&RegistrationFields {
        first_name: &request.first_name,
        last_name: &request.last_name,
        username: &request.username,
        email: &request.email,
        role: &request.role,
        password: &request.password,
        confirm_password: &form.confirm_password,
    })?;

    button.begin();

    if let Err(e) = state.api.register(&request).await {
        button.reset();
        return Err(e.into());
    }
    tracing::debug!(username = %request.username, "Registered");

    Ok(Submitted {
        banner: Banner::success("Registration successful! Redirecting to login..."),
        redirect: Redirect::after(Route::Login, Redirect::REGISTER_DELAY),
    })
}
