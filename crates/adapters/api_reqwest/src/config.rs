//! Places API client configuration.

use serde::Deserialize;

/// Where and how to reach the places API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port of the API server (e.g. `http://127.0.0.1:8000`).
    pub base_url: String,
    /// Versioned root path under which all resources live.
    pub root: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Absolute URL of the API root, always ending with a single `/`.
    #[must_use]
    pub fn root_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let root = self.root.trim_matches('/');
        if root.is_empty() {
            format!("{base}/")
        } else {
            format!("{base}/{root}/")
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            root: "/api/v1/".to_string(),
            timeout_secs: 10,
        }
    }
}
