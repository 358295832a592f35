//! API client configuration.

use serde::{Deserialize, Serialize};

/// Where requests are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Versioned API root. Endpoint paths are appended to it.
    pub base_url: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.figma.com/v1/";

    pub fn new() -> Self {
        Self::default()
    }

    /// Point requests at another API root, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiConfig::new().base_url, "https://api.figma.com/v1/");
    }

    #[test]
    fn test_from_empty_json() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());

        let config = ApiConfig::new().with_base_url("http://localhost:9000/v1/");
        assert_eq!(config.base_url, "http://localhost:9000/v1/");
    }
}
