//! Admin actions. Permission is enforced by the server; the client only
//! requires a session.

use portal_core::guard;
use portal_shared::dto::ChangeRoleRequest;

use super::Page;
use crate::error::AppResult;
use crate::shell::Banner;
use crate::state::AppState;

/// `PUT /auth/change-role` for another user.
pub async fn change_role(state: &AppState, user_id: i64, new_role: &str) -> AppResult<Page<Banner>> {
    if let Some(redirect) = guard::protect_page(&state.session).await {
        return Ok(Page::Redirect(redirect));
    }

    let request = ChangeRoleRequest {
        user_id,
        new_role: new_role.trim().to_lowercase(),
    };
    let response = state.api.change_role(&request).await?;

    let message = response
        .get("message")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("Role updated");
    Ok(Page::Show(Banner::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::state_for;
    use portal_core::domain::{Redirect, Route, UserProfile};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_requires_session() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let state = state_for(&server);
        assert_eq!(
            change_role(&state, 2, "admin").await.unwrap(),
            Page::Redirect(Redirect::immediate(Route::Login))
        );
    }

    #[tokio::test]
    async fn test_success_message_from_server() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/auth/change-role"))
            .and(header("authorization", "Bearer tok-admin"))
            .and(body_json(json!({ "user_id": 2, "new_role": "admin" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "User role updated successfully from employee to admin"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let state = state_for(&server);
        state
            .session
            .set_session("tok-admin", &UserProfile::default())
            .await;

        assert_eq!(
            change_role(&state, 2, " Admin ").await.unwrap(),
            Page::Show(Banner::success(
                "User role updated successfully from employee to admin"
            ))
        );
    }

    #[tokio::test]
    async fn test_forbidden_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({ "error": "Unauthorized. Admin access required" })),
            )
            .mount(&server)
            .await;

        let state = state_for(&server);
        state
            .session
            .set_session("tok-user", &UserProfile::default())
            .await;

        let err = change_role(&state, 2, "admin").await.unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized. Admin access required");
    }
}
