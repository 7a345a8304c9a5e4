//! API client
//!
//! [`Client`] is the context every resource operation runs in. It owns the
//! executor and the auth coordinator and shares the session store with them,
//! so no process-wide state is involved.

use crate::auth::{AuthRetryCoordinator, OAuth2Refresher, Session, SessionStore, TokenRefresher};
use crate::config::ClientConfig;
use crate::decode::Parser;
use crate::error::Result;
use crate::http::{HttpClient, Transport};
use crate::request::{Execution, Executor, RequestDescriptor};
use crate::response::{PaginatedApiResponse, PageParser, SimpleApiResponse};
use crate::types::StringMap;
use std::sync::Arc;
use url::Url;

/// SoundCloud API client
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    api_base: Url,
    executor: Executor,
    auth: AuthRetryCoordinator,
}

impl Client {
    /// Create a client using the reqwest transport and OAuth2 refresh
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = HttpClient::with_config(config.http_config())?;
        let refresher = OAuth2Refresher::with_client(
            config.token_url.clone(),
            config.client_id.clone(),
            config.client_secret.clone().unwrap_or_default(),
            http.inner().clone(),
        );

        Self::with_transport(config, Arc::new(http), Arc::new(refresher))
    }

    /// Create a client over custom transport and refresh implementations
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        refresher: Arc<dyn TokenRefresher>,
    ) -> Result<Self> {
        config.validate()?;

        let executor = Executor::new(transport);
        let auth = AuthRetryCoordinator::new(executor.clone(), SessionStore::new(), refresher);

        Ok(Self {
            api_base: config.api_base(),
            config,
            executor,
            auth,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the request executor
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Get the auth coordinator
    pub fn auth(&self) -> &AuthRetryCoordinator {
        &self.auth
    }

    /// Get the session store
    pub fn session(&self) -> &SessionStore {
        self.auth.session()
    }

    /// Start a session
    pub async fn login(&self, session: Session) {
        self.session().login(session).await;
    }

    /// End the session
    pub async fn logout(&self) {
        self.session().logout().await;
    }

    /// Resolve a path against the API base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.api_base.join(path.trim_start_matches('/'))?)
    }

    /// Parameters every request carries
    pub(crate) fn base_parameters(&self) -> StringMap {
        let mut parameters = StringMap::new();
        parameters.insert("client_id".to_string(), self.config.client_id.clone());
        parameters
    }

    /// Execute an unauthenticated single-result request
    pub(crate) async fn simple<T>(&self, descriptor: RequestDescriptor<T>) -> SimpleApiResponse<T> {
        self.executor.execute(descriptor).await.into()
    }

    /// Execute the first page of a collection under `path`
    ///
    /// An unresolvable path yields a failed page with no next locator.
    pub(crate) async fn paginated<T: Send + 'static>(
        &self,
        path: &str,
        mut parameters: StringMap,
        item: Parser<T>,
    ) -> PaginatedApiResponse<T> {
        parameters.insert("linked_partitioning".to_string(), "true".to_string());
        let parser = PageParser::new(item);

        match self.endpoint(path) {
            Ok(url) => {
                let descriptor = RequestDescriptor::get(url, parser.parser()).parameters(parameters);
                PaginatedApiResponse::fetch(&self.executor, parser, descriptor).await
            }
            Err(e) => {
                let execution = Execution {
                    meta: None,
                    result: Err(e),
                };
                PaginatedApiResponse::from_execution(execution, parser, self.executor.clone())
            }
        }
    }

    /// Execute an operation that needs the access token
    pub(crate) async fn authorized<T, F>(&self, build: F) -> SimpleApiResponse<T>
    where
        F: Fn(&str) -> Result<RequestDescriptor<T>>,
    {
        self.auth.execute(build).await.into()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_base", &self.api_base.as_str())
            .field("client_id", &self.config.client_id)
            .finish_non_exhaustive()
    }
}
