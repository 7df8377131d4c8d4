//! The API client - the only place bearer tokens are attached to requests.

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use portal_core::SessionStore;
use portal_core::domain::UserProfile;
use portal_shared::dto::{
    ChangeRoleRequest, CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest,
};
use portal_shared::{ErrorBody, HealthResponse};

use super::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// HTTP client for the authentication API.
///
/// Stateless per call apart from reading the token from the session store
/// when the request is built. No retries and no explicit timeout.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, session)
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        session: SessionStore,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// `GET endpoint`.
    pub async fn get(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.call(endpoint, Method::GET, None).await
    }

    /// Send one request and return the parsed JSON body.
    ///
    /// The body is parsed as JSON whatever the status. A 2xx returns it as-is;
    /// anything else fails with the body's `error` text or "Request failed".
    pub async fn call(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.session.get_token().await {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body.filter(|body| !is_falsy(body)) {
            request = request.body(body.to_string());
        }

        tracing::debug!(%method, endpoint, "Dispatching API request");

        let response = request.send().await.map_err(|e| {
            tracing::debug!(%method, endpoint, error = %e, "API request failed in transport");
            ApiError::from(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let data: Value =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(%method, endpoint, status = status.as_u16(), "API request rejected");
            return Err(ApiError::Request(ErrorBody::message_from(&data)));
        }

        Ok(data)
    }

    async fn call_typed<B, R>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        let data = self.call(endpoint, method, body.as_ref()).await?;
        serde_json::from_value(data).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// `POST /auth/login`.
    pub async fn login(
        &self,
        credentials: &LoginRequest,
    ) -> Result<LoginResponse<UserProfile>, ApiError> {
        self.call_typed("/auth/login", Method::POST, Some(credentials))
            .await
    }

    /// `POST /auth/register`. The success payload is returned untouched.
    pub async fn register(&self, form: &RegisterRequest) -> Result<Value, ApiError> {
        self.call_typed("/auth/register", Method::POST, Some(form))
            .await
    }

    /// `GET /auth/me`.
    pub async fn current_user(&self) -> Result<UserProfile, ApiError> {
        let response: CurrentUserResponse<UserProfile> = self
            .call_typed("/auth/me", Method::GET, None::<&Value>)
            .await?;
        Ok(response.user)
    }

    /// `PUT /auth/change-role`. The server only allows admins.
    pub async fn change_role(&self, change: &ChangeRoleRequest) -> Result<Value, ApiError> {
        self.call_typed("/auth/change-role", Method::PUT, Some(change))
            .await
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.call_typed("/health", Method::GET, None::<&Value>)
            .await
    }
}

/// Bodies that count as "no body": `null`, `false`, `0` and `""`.
fn is_falsy(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
