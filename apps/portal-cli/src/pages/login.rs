//! Login page.

use portal_core::domain::{Redirect, Route};
use portal_core::{guard, validation};
use portal_shared::dto::LoginRequest;

use super::Submitted;
use crate::error::AppResult;
use crate::shell::{Banner, SubmitButton};
use crate::state::AppState;

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Already signed in visitors skip straight to the dashboard.
pub async fn enter(state: &AppState) -> Option<Redirect> {
    guard::redirect_if_logged_in(&state.session).await
}

/// Validate, call `POST /auth/login`, and store the issued session.
pub async fn submit(
    state: &AppState,
    form: &LoginForm,
    button: &mut SubmitButton,
) -> AppResult<Submitted> {
    let email = form.email.trim();
    validation::validate_login(email, &form.password)?;

    button.begin();

    let request = LoginRequest {
        email: email.to_string(),
        password: form.password.clone(),
    };
    let response = match state.api.login(&request).await {
        Ok(response) => response,
        Err(e) => {
            button.reset();
            return Err(e.into());
        }
    };

    state
        .session
        .set_session(&response.access_token, &response.user)
        .await;
    tracing::debug!(email, "Logged in");

    Ok(Submitted {
        banner: Banner::success("Login successful! Redirecting..."),
        redirect: Redirect::after(Route::Dashboard, Redirect::LOGIN_DELAY),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::pages::testing::state_for;
    use portal_core::ValidationError;
    use portal_core::domain::{Role, UserProfile};
    use portal_shared::ErrorBody;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_successful_login_stores_session_and_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({ "email": "jane@example.com", "password": "Str0ng!pass" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Login successful",
                "access_token": "tok-1",
                "user": {
                    "user_id": 1,
                    "username": "jdoe",
                    "email": "jane@example.com",
                    "role": "admin",
                    "first_name": "Jane",
                    "last_name": "Doe"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let state = state_for(&server);
        let mut button = SubmitButton::login();

        let submitted = submit(&state, &form("  jane@example.com ", "Str0ng!pass"), &mut button)
            .await
            .unwrap();

        assert_eq!(state.session.get_token().await.as_deref(), Some("tok-1"));
        let user = state.session.get_user().await.unwrap().unwrap();
        assert_eq!(user.role, Some(Role::Admin));
        assert_eq!(user.display_name(), "Jane Doe");

        assert_eq!(submitted.redirect.route, Route::Dashboard);
        assert_eq!(submitted.redirect.delay, Duration::from_secs(1));
        assert_eq!(submitted.banner, Banner::success("Login successful! Redirecting..."));
        assert!(button.is_disabled());
    }

    #[tokio::test]
    async fn test_rejected_login_reenables_button() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(ErrorBody {
                error: Some("Invalid credentials".into()),
            }))
            .mount(&server)
            .await;

        let state = state_for(&server);
        let mut button = SubmitButton::login();

        let err = submit(&state, &form("jane@example.com", "wrong"), &mut button)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!button.is_disabled());
        assert_eq!(button.label(), "Login");
        assert!(!state.session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_blank_fields_never_reach_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let state = state_for(&server);
        let mut button = SubmitButton::login();

        let err = submit(&state, &form("   ", "secret"), &mut button)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(ValidationError::MissingCredentials)
        ));
        assert_eq!(err.to_string(), "Please enter both email and password");
        assert!(!button.is_disabled());
    }

    #[tokio::test]
    async fn test_enter_redirects_when_logged_in() {
        let server = MockServer::start().await;
        let state = state_for(&server);
        assert_eq!(enter(&state).await, None);

        state
            .session
            .set_session("tok-1", &UserProfile::default())
            .await;
        assert_eq!(
            enter(&state).await,
            Some(Redirect::immediate(Route::Dashboard))
        );
    }
}
