//! Client configuration.
//!
//! Loaded from the environment (`HCLOUD_ENDPOINT`, `HCLOUD_TOKEN`) or
//! deserialized from any serde source. The token is optional so that the
//! client can be pointed at a local replay server without credentials.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://api.hetzner.cloud/v1";
pub const ENDPOINT_ENV: &str = "HCLOUD_ENDPOINT";
pub const TOKEN_ENV: &str = "HCLOUD_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            user_agent: concat!("hcloud-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Build a config from `HCLOUD_ENDPOINT` and `HCLOUD_TOKEN`, falling
    /// back to the defaults for anything unset.
    pub fn from_env() -> Result<Self, ApiError> {
        let mut config = Self::default();
        if let Some(endpoint) = read_env(ENDPOINT_ENV)? {
            config = config.with_base_url(&endpoint);
        }
        if let Some(token) = read_env(TOKEN_ENV)? {
            config = config.with_token(&token);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

fn read_env(key: &str) -> Result<Option<String>, ApiError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => {
            Err(ApiError::Config(format!("{key} is not valid unicode")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.token.is_none());
        assert!(config.user_agent.starts_with("hcloud-rs/"));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:3000/");
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let config: ClientConfig = serde_json::from_str(r#"{"token":"secret"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token.as_deref(), Some("secret"));
    }
}
