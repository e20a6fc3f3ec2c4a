use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the dashboard API.
///
/// Every field falls back to its default when missing from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL the `/wallet`, `/transactions` and `/user` paths hang off.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout (ignored on wasm32, where the browser owns it).
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Settings {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// Parse and validate settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::InvalidConfig(format!(
                "api_base_url '{url}' must start with http:// or https://"
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::InvalidConfig(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
