//! Session types

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, RwLock, RwLockWriteGuard};

/// Credentials of a logged-in user
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// OAuth access token
    pub access_token: String,
    /// Token used to obtain a new access token
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Granted scope
    #[serde(default)]
    pub scope: Option<String>,
}

impl Session {
    /// Create a session from an access token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            scope: None,
        }
    }

    /// Set the refresh token
    #[must_use]
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("scope", &self.scope)
            .finish()
    }
}

/// Session plus the number of refresh attempts made for it
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    pub(crate) session: Option<Session>,
    /// Completed refresh attempts, successful or not
    pub(crate) refresh_attempts: u64,
}

/// Access token as read before a request, with the refresh attempt count
/// observed at that moment
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenSnapshot {
    pub(crate) token: String,
    pub(crate) refresh_attempts: u64,
}

/// Shared, optional session
///
/// Cloning yields another handle to the same session.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionState>>,
    refresh_gate: Arc<Mutex<()>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a session
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionState {
                session: Some(session),
                refresh_attempts: 0,
            })),
            refresh_gate: Arc::default(),
        }
    }

    /// Replace the session
    pub async fn login(&self, session: Session) {
        self.inner.write().await.session = Some(session);
    }

    /// Clear the session
    pub async fn logout(&self) {
        self.inner.write().await.session = None;
    }

    /// Snapshot of the current session
    pub async fn current(&self) -> Option<Session> {
        self.inner.read().await.session.clone()
    }

    /// Current access token
    pub async fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .session
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    /// Current access token together with the refresh attempt count
    pub(crate) async fn token_snapshot(&self) -> Option<TokenSnapshot> {
        let state = self.inner.read().await;
        state.session.as_ref().map(|s| TokenSnapshot {
            token: s.access_token.clone(),
            refresh_attempts: state.refresh_attempts,
        })
    }

    /// Serializes refresh attempts without blocking token reads
    pub(crate) async fn lock_refresh(&self) -> MutexGuard<'_, ()> {
        self.refresh_gate.lock().await
    }

    /// Exclusive access to the session state
    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner.write().await
    }
}
