use serde::{Deserialize, Serialize};
use tracing::warn;

use super::errors::{ConfigError, ConfigResult};

/// Backend used when no override is supplied at build time
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Connection settings for the ticket backend, injected into `TicketClient`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix, without trailing slash
    pub base_url: String,
    /// Send cookies along with every request (`credentials: include`)
    pub include_credentials: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            include_credentials: true,
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `TICKET_API_URL` captured at compile time, falling back to the default
    pub fn from_env() -> Self {
        Self::from_override(option_env!("TICKET_API_URL"))
    }

    fn from_override(url: Option<&str>) -> Self {
        let config = match url {
            Some(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
            _ => return Self::default(),
        };

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Invalid configuration: {}", e);
                Self::default()
            }
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_credentials(mut self, include_credentials: bool) -> Self {
        self.include_credentials = include_credentials;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Empty {
                field: "base_url".to_string(),
            });
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                field: "base_url".to_string(),
                value: self.base_url.clone(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        Ok(())
    }

    /// `{base}/tickets/`
    pub fn collection_url(&self) -> String {
        format!("{}/tickets/", self.base_url)
    }

    /// `{base}/tickets/{id}/`
    pub fn resource_url(&self, id: u64) -> String {
        format!("{}/tickets/{}/", self.base_url, id)
    }

    /// Backend root one level above the `/api` prefix
    pub fn service_root_url(&self) -> String {
        let root = self.base_url.strip_suffix("/api").unwrap_or(&self.base_url);
        format!("{}/", root)
    }
}
