//! Application state - the session store and the API client bound to it.

use std::sync::Arc;

use portal_core::SessionStore;
use portal_core::ports::{Storage, StorageError};
use portal_infra::{ApiClient, FileStorage};

use crate::config::AppConfig;

/// Shared application state handed to every page.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub api: ApiClient,
}

impl AppState {
    /// Build the state with file-backed session storage.
    pub fn new(config: &AppConfig) -> Result<Self, StorageError> {
        let storage = FileStorage::open(&config.data_dir, &config.origin)?;
        tracing::debug!(
            path = %storage.path().display(),
            api_url = %config.api_url,
            "Application state initialized"
        );
        Ok(Self::with_storage(Arc::new(storage), &config.api_url))
    }

    pub fn with_storage(storage: Arc<dyn Storage>, api_url: &str) -> Self {
        let session = SessionStore::new(storage);
        let api = ApiClient::new(api_url, session.clone());
        Self { session, api }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::domain::UserProfile;

    fn config_in(dir: &std::path::Path) -> AppConfig {
        let data_dir = dir.join("data").display().to_string();
        AppConfig::from_lookup(|key| match key {
            "PORTAL_API_URL" => Some("http://localhost:5000/api".to_string()),
            "PORTAL_DATA_DIR" => Some(data_dir.clone()),
            _ => None,
        })
    }

    #[tokio::test]
    async fn test_file_backed_session_persists_across_states() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let first = AppState::new(&config).unwrap();
        first
            .session
            .set_session("tok-1", &UserProfile::default())
            .await;

        let second = AppState::new(&config).unwrap();
        assert_eq!(second.session.get_token().await.as_deref(), Some("tok-1"));
        assert!(dir.path().join("data").join("http_localhost_5000.json").is_file());
    }

    #[test]
    fn test_unusable_data_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        std::fs::write(&blocker, "not a directory").unwrap();

        assert!(AppState::new(&config_in(dir.path())).is_err());
    }
}
