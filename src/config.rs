use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::{GriddleError, Result};

/// Connection settings for a search service deployment.
///
/// Authentication is either basic (username + password) or a service token,
/// never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base address of the service, e.g. "http://localhost:3002".
    pub address: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub token: Option<String>,

    /// Default per-request timeout in milliseconds. Individual calls may
    /// override it.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Config {
    pub fn new(address: impl Into<String>) -> Self {
        Config {
            address: address.into(),
            username: None,
            password: None,
            token: None,
            timeout_ms: None,
        }
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Read connection settings from `GRIDDLE_*` environment variables.
    ///
    /// `GRIDDLE_ADDRESS` defaults to "http://localhost:3002" when unset.
    pub fn from_env() -> Self {
        let address = match std::env::var("GRIDDLE_ADDRESS") {
            Ok(address) => address,
            Err(_) => {
                tracing::debug!("GRIDDLE_ADDRESS not set, using http://localhost:3002");
                "http://localhost:3002".to_string()
            }
        };

        Config {
            address,
            username: std::env::var("GRIDDLE_USERNAME").ok(),
            password: std::env::var("GRIDDLE_PASSWORD").ok(),
            token: std::env::var("GRIDDLE_TOKEN").ok(),
            timeout_ms: std::env::var("GRIDDLE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Base address parsed and normalized, trailing slashes removed.
    pub(crate) fn base_url(&self) -> Result<Url> {
        if self.address.is_empty() {
            return Err(GriddleError::Config("address is empty".to_string()));
        }
        Ok(Url::parse(self.address.trim_end_matches('/'))?)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.token.is_some() && self.username.is_some() {
            return Err(GriddleError::Config(
                "both token and username are set".to_string(),
            ));
        }
        self.base_url()?;
        Ok(())
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
