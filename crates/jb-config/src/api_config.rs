use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL};

use serde::Deserialize;
use url::Url;

/// Where the job board REST API lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to (e.g. "https://jobs.example.com/api")
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let parsed = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::api(format!("api.base_url '{}' is not a URL: {e}", self.base_url))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::api(format!(
                "api.base_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        Ok(())
    }
}
