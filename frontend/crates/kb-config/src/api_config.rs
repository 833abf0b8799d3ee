use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL};

use serde::Deserialize;

/// Where the project API lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port of the API, without the `/projects/` path
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
        let url = self.base_url.trim();

        if url.is_empty() {
            return Err(ConfigError::api("api.base_url must not be empty"));
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        Ok(())
    }
}
