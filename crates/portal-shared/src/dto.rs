//! Data Transfer Objects - request/response bodies of the auth endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub password: String,
}

/// Successful login. `U` is the client's view of the user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse<U> {
    pub access_token: String,
    pub user: U,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse<U> {
    pub user: U,
}

/// Body of `PUT /auth/change-role`. Admin only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    pub user_id: i64,
    pub new_role: String,
}
