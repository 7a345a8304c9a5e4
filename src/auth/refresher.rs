//! Token refresh
//!
//! Obtains a new access token for an existing session.

use super::types::Session;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Renews the access token of a session
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Exchange the session's refresh token for a new session
    async fn refresh(&self, session: &Session) -> Result<Session>;
}

/// OAuth2 refresh-token grant
pub struct OAuth2Refresher {
    /// Token endpoint URL
    token_url: Url,
    /// Client ID
    client_id: String,
    /// Client secret
    client_secret: String,
    /// HTTP client for token requests
    http_client: Client,
}

impl OAuth2Refresher {
    /// Create a refresher with its own HTTP client
    pub fn new(token_url: Url, client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::with_client(token_url, client_id, client_secret, Client::new())
    }

    /// Create a refresher with a custom HTTP client
    pub fn with_client(
        token_url: Url,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        http_client: Client,
    ) -> Self {
        Self {
            token_url,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            http_client,
        }
    }
}

#[async_trait]
impl TokenRefresher for OAuth2Refresher {
    async fn refresh(&self, session: &Session) -> Result<Session> {
        let refresh_token = session
            .refresh_token
            .as_deref()
            .ok_or_else(|| Error::token_refresh("session has no refresh token"))?;

        let form = [
            ("grant_type", "refresh_token"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", refresh_token),
        ];

        debug!("Requesting token refresh from {}", self.token_url);
        let response = self
            .http_client
            .post(self.token_url.clone())
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::token_refresh(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::token_refresh(format!(
                "Refresh token request failed with status {status}: {body}"
            )));
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::token_refresh(format!("Invalid token response: {e}")))?;
        Ok(token_response.into_session(session))
    }
}

impl std::fmt::Debug for OAuth2Refresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth2Refresher")
            .field("token_url", &self.token_url.as_str())
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

/// OAuth2 token response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    scope: Option<String>,
}

impl TokenResponse {
    /// Servers may omit a rotated refresh token; keep the previous one then
    fn into_session(self, previous: &Session) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token.or_else(|| previous.refresh_token.clone()),
            scope: self.scope.or_else(|| previous.scope.clone()),
        }
    }
}
