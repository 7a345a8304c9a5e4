//! Client configuration
//!
//! Configuration can be built in code or loaded from YAML:
//!
//! ```yaml
//! client_id: abc123
//! client_secret: s3cr3t
//! api_url: https://api.soundcloud.com/
//! token_url: https://api.soundcloud.com/oauth2/token
//! timeout_secs: 30
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

static DEFAULT_API_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("https://api.soundcloud.com/").expect("valid URL literal"));

static DEFAULT_TOKEN_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://api.soundcloud.com/oauth2/token").expect("valid URL literal")
});

/// Settings of a [`Client`](crate::Client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Application client ID, sent with every request
    pub client_id: String,

    /// Application client secret, used for token refresh
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Base URL of the API
    #[serde(default = "default_api_url")]
    pub api_url: Url,

    /// OAuth2 token endpoint
    #[serde(default = "default_token_url")]
    pub token_url: Url,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Custom user agent
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_api_url() -> Url {
    DEFAULT_API_URL.clone()
}

fn default_token_url() -> Url {
    DEFAULT_TOKEN_URL.clone()
}

fn default_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    /// Create a config with default endpoints
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
            api_url: default_api_url(),
            token_url: default_token_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }

    /// Parse and validate a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Set the client secret
    #[must_use]
    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Set the API base URL
    #[must_use]
    pub fn with_api_url(mut self, url: Url) -> Self {
        self.api_url = url;
        self
    }

    /// Set the token endpoint
    #[must_use]
    pub fn with_token_url(mut self, url: Url) -> Self {
        self.token_url = url;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Check required fields
    pub fn validate(&self) -> Result<()> {
        if self.client_id.trim().is_empty() {
            return Err(Error::config("client_id must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "api_url '{}' cannot be used as a base URL",
                self.api_url
            )));
        }
        Ok(())
    }

    /// Base URL with a trailing slash so relative paths nest under it
    pub fn api_base(&self) -> Url {
        let mut base = self.api_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base
    }

    /// Transport settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().timeout(Duration::from_secs(self.timeout_secs));
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder.build()
    }
}
