//! Client configuration: where the API lives and which Basic credentials to
//! send on mutating requests.

use std::env;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let parsed = match Url::parse(&base_url) {
            Ok(parsed) => parsed,
            Err(_) => return Err(ConfigError::InvalidBaseUrl(base_url)),
        };
        let has_host = parsed.host_str().is_some_and(|host| !host.is_empty());
        if !matches!(parsed.scheme(), "http" | "https") || !has_host {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
        })
    }

    /// Defaults overridden by `VIAGENS_API_URL`, `VIAGENS_API_USER` and
    /// `VIAGENS_API_PASSWORD`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Self::new(
            env::var("VIAGENS_API_URL").unwrap_or(defaults.base_url),
            env::var("VIAGENS_API_USER").unwrap_or(defaults.username),
            env::var("VIAGENS_API_PASSWORD").unwrap_or(defaults.password),
        )
    }

    /// Value for the `Authorization` header.
    pub fn basic_auth_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}
