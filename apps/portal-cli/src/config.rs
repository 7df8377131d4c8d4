//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;
use portal_infra::api::DEFAULT_BASE_URL;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL every API endpoint is appended to.
    pub api_url: String,
    /// Directory holding the persisted session files.
    pub data_dir: PathBuf,
    /// Origin the stored session is scoped to.
    pub origin: String,
    origin_overridden: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = get("PORTAL_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let explicit_origin = get("PORTAL_ORIGIN");

        Self {
            origin: explicit_origin
                .clone()
                .unwrap_or_else(|| origin_of(&api_url).to_string()),
            origin_overridden: explicit_origin.is_some(),
            data_dir: get("PORTAL_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_data_dir),
            api_url,
        }
    }

    /// Replace the API URL (command-line override). The origin follows the
    /// new URL unless `PORTAL_ORIGIN` pinned it.
    pub fn with_api_url(mut self, api_url: String) -> Self {
        if !self.origin_overridden {
            self.origin = origin_of(&api_url).to_string();
        }
        self.api_url = api_url;
        self
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "portal")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".portal"))
}

/// `scheme://host[:port]` part of a URL.
fn origin_of(url: &str) -> &str {
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    match url[after_scheme..].find('/') {
        Some(i) => &url[..after_scheme + i],
        None => url,
    }
}
