//! Refresh-and-retry for authorized operations
//!
//! An authorized operation moves through these states:
//!
//! ```text
//! Sent ──ok / other error──────────────────────────────▶ Done
//!  │
//!  └─auth rejected─▶ AuthExpired ─▶ Refreshing ─fail──▶ Done (original error)
//!                                       │
//!                                       └─ok─▶ Retrying ─▶ Done (retry result)
//! ```
//!
//! `Retrying` always ends in `Done`, so an operation reaches the transport at
//! most twice and refreshes at most once.

use super::refresher::TokenRefresher;
use super::types::{SessionStore, TokenSnapshot};
use crate::error::{Error, Result};
use crate::request::{Executor, RequestDescriptor};
use std::sync::Arc;
use tracing::{debug, info, warn};

enum RetryState<T> {
    Sent { snapshot: TokenSnapshot },
    AuthExpired { stale: TokenSnapshot, error: Error },
    Refreshing { stale: TokenSnapshot, error: Error },
    Retrying { token: String },
    Done(Result<T>),
}

/// Runs operations that need the session's access token
#[derive(Clone)]
pub struct AuthRetryCoordinator {
    executor: Executor,
    session: SessionStore,
    refresher: Arc<dyn TokenRefresher>,
}

impl AuthRetryCoordinator {
    /// Create a coordinator
    pub fn new(executor: Executor, session: SessionStore, refresher: Arc<dyn TokenRefresher>) -> Self {
        Self {
            executor,
            session,
            refresher,
        }
    }

    /// Get the session store
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Execute the descriptor built by `build` for the current access token
    ///
    /// `build` is called again with the renewed token when the first attempt
    /// is rejected. Without a session nothing is sent and `Error::NoSession`
    /// is returned.
    pub async fn execute<T, F>(&self, build: F) -> Result<T>
    where
        F: Fn(&str) -> Result<RequestDescriptor<T>>,
    {
        let Some(snapshot) = self.session.token_snapshot().await else {
            debug!("Authorized operation without a session");
            return Err(Error::NoSession);
        };

        let mut state = RetryState::Sent { snapshot };
        loop {
            state = match state {
                RetryState::Sent { snapshot } => match build(&snapshot.token) {
                    Ok(descriptor) => {
                        let execution = self.executor.execute(descriptor).await;
                        match execution.result {
                            Err(error) if error.is_auth_expired() => RetryState::AuthExpired {
                                stale: snapshot,
                                error,
                            },
                            result => RetryState::Done(result),
                        }
                    }
                    Err(e) => RetryState::Done(Err(e)),
                },

                RetryState::AuthExpired { stale, error } => {
                    warn!("Access token rejected, refreshing");
                    RetryState::Refreshing { stale, error }
                }

                RetryState::Refreshing { stale, error } => match self.refresh(&stale).await {
                    Ok(token) => RetryState::Retrying { token },
                    Err(e) => {
                        warn!("Token refresh failed: {e}");
                        RetryState::Done(Err(error))
                    }
                },

                RetryState::Retrying { token } => match build(&token) {
                    Ok(descriptor) => RetryState::Done(self.executor.execute(descriptor).await.result),
                    Err(e) => RetryState::Done(Err(e)),
                },

                RetryState::Done(result) => return result,
            };
        }
    }

    /// Rotate the token that was rejected, once across concurrent callers
    ///
    /// Attempts run one at a time. A caller that finds the token already
    /// changed reuses the new one. A caller whose token saw a completed
    /// attempt after it was read gets a failure without another attempt.
    async fn refresh(&self, stale: &TokenSnapshot) -> Result<String> {
        let _gate = self.session.lock_refresh().await;

        let session = {
            let state = self.session.write().await;
            let current = state.session.as_ref().ok_or(Error::NoSession)?;

            if current.access_token != stale.token {
                debug!("Access token already refreshed by another request");
                return Ok(current.access_token.clone());
            }
            if state.refresh_attempts != stale.refresh_attempts {
                debug!("Refresh for this access token already failed");
                return Err(Error::token_refresh(
                    "refresh already attempted for this access token",
                ));
            }
            current.clone()
        };

        let outcome = self.refresher.refresh(&session).await;

        let mut state = self.session.write().await;
        state.refresh_attempts += 1;
        let renewed = outcome?;

        let replaced = match &state.session {
            None => return Err(Error::NoSession),
            Some(current) if current.access_token != stale.token => {
                Some(current.access_token.clone())
            }
            Some(_) => None,
        };
        if let Some(token) = replaced {
            debug!("Session replaced during refresh");
            return Ok(token);
        }

        let token = renewed.access_token.clone();
        state.session = Some(renewed);
        info!("Access token refreshed");
        Ok(token)
    }
}

impl std::fmt::Debug for AuthRetryCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRetryCoordinator")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
