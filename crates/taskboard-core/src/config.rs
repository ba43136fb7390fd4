//! Client Configuration
//!
//! Only the API root is configurable. The UI bakes it in at build time from
//! `TASKBOARD_API_URL`.

use serde::{Deserialize, Serialize};

/// API root used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root without a trailing slash
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_url: default_api_url() }
    }
}

impl ClientConfig {
    pub fn new(api_url: &str) -> Self {
        let trimmed = api_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self { api_url: trimmed.to_string() }
        }
    }

    /// Config from an optional override, e.g. `option_env!("TASKBOARD_API_URL")`
    pub fn from_override(api_url: Option<&str>) -> Self {
        api_url.map(Self::new).unwrap_or_default()
    }
}
