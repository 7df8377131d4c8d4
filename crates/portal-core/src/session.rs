//! Session store - the persisted access token and user profile.

use std::sync::Arc;

use crate::domain::{Session, UserProfile};
use crate::error::SessionError;
use crate::ports::Storage;

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "access_token";
/// Storage key holding the JSON-serialized [`UserProfile`].
pub const USER_KEY: &str = "user";

/// Durable client-side holder of the current token and user profile.
///
/// Token and profile are two independent storage entries. Writes are not
/// atomic as a pair: if the profile write fails after the token write
/// succeeded, the store is left authenticated without a profile.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Persist a freshly issued session.
    ///
    /// Rejected writes are logged and otherwise ignored.
    pub async fn set_session(&self, token: &str, user: &UserProfile) {
        if let Err(e) = self.storage.set_item(TOKEN_KEY, token).await {
            tracing::warn!(key = TOKEN_KEY, error = %e, "Failed to store session entry");
        }

        let serialized = match serde_json::to_string(user) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(key = USER_KEY, error = %e, "Failed to serialize user profile");
                return;
            }
        };

        if let Err(e) = self.storage.set_item(USER_KEY, &serialized).await {
            tracing::warn!(key = USER_KEY, error = %e, "Failed to store session entry");
        }
    }

    pub async fn get_token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY).await
    }

    /// Load the stored profile. An empty entry or a JSON `null` counts as unset.
    pub async fn get_user(&self) -> Result<Option<UserProfile>, SessionError> {
        match self.storage.get_item(USER_KEY).await {
            Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(None),
        }
    }

    /// Remove both entries. Safe to call on an empty store.
    pub async fn clear_session(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove_item(key).await {
                tracing::warn!(key, error = %e, "Failed to remove session entry");
            }
        }
    }

    /// True iff a token is stored. The token itself is not inspected.
    pub async fn is_authenticated(&self) -> bool {
        self.get_token().await.is_some()
    }

    pub async fn session(&self) -> Result<Session, SessionError> {
        Ok(Session {
            token: self.get_token().await,
            user: self.get_user().await?,
        })
    }
}
