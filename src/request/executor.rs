//! Request executor
//!
//! Sends descriptors through a [`Transport`] and classifies the outcome:
//! - No response at all becomes `Error::Network`
//! - Rejected credentials become `Error::AuthExpired`
//! - Payloads that do not fit the parser become `Error::Decode`

use super::descriptor::RequestDescriptor;
use crate::decode::Parser;
use crate::error::{Error, Result};
use crate::http::{HttpResponse, Transport};
use crate::types::JsonValue;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

/// Metadata of a response that reached the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    /// Status code
    pub status: u16,
    /// URL the request was sent to
    pub url: Url,
}

/// Outcome of one executed descriptor
#[derive(Debug)]
pub struct Execution<T> {
    /// Present when the transport produced a response
    pub meta: Option<ResponseMeta>,
    /// Parsed value or failure
    pub result: Result<T>,
}

impl<T> Execution<T> {
    /// Check whether the API rejected the credential
    pub fn is_auth_expired(&self) -> bool {
        matches!(&self.result, Err(e) if e.is_auth_expired())
    }

    /// Drop the metadata
    pub fn into_result(self) -> Result<T> {
        self.result
    }
}

/// Executes request descriptors
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
}

impl Executor {
    /// Create an executor over the given transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send the descriptor and parse the response
    pub async fn execute<T>(&self, descriptor: RequestDescriptor<T>) -> Execution<T> {
        let (request, parse) = descriptor.into_parts();
        debug!("Executing {} {}", request.method, request.url);

        match self.transport.send(&request).await {
            Ok(response) => {
                let meta = ResponseMeta {
                    status: response.status,
                    url: request.url,
                };
                let result = interpret(&response, &parse);
                if let Err(ref e) = result {
                    debug!("{} {} failed: {e}", request.method, meta.url);
                }
                Execution {
                    meta: Some(meta),
                    result,
                }
            }
            Err(e) => {
                warn!("Transport failed for {} {}: {e}", request.method, request.url);
                Execution {
                    meta: None,
                    result: Err(e),
                }
            }
        }
    }

    /// Execute on the tokio runtime and hand the outcome to `completion`
    pub fn start<T, F>(&self, descriptor: RequestDescriptor<T>, completion: F) -> JoinHandle<()>
    where
        T: Send + 'static,
        F: FnOnce(Execution<T>) + Send + 'static,
    {
        let executor = self.clone();
        tokio::spawn(async move {
            let execution = executor.execute(descriptor).await;
            completion(execution);
        })
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor").finish_non_exhaustive()
    }
}

/// Turn a raw response into a typed result
fn interpret<T>(response: &HttpResponse, parse: &Parser<T>) -> Result<T> {
    if is_auth_error(response) {
        return Err(Error::AuthExpired);
    }

    if !response.is_success() {
        return Err(Error::http_status(response.status, response.body.clone()));
    }

    let body = response.body.trim();
    let payload = if body.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_str(body)?
    };

    parse.parse(&payload)
}

/// Detect a rejected credential from the status or the API's error body
///
/// The API reports some auth failures as `{"errors": [{"error_message": "401 - Unauthorized"}]}`.
fn is_auth_error(response: &HttpResponse) -> bool {
    if response.status == 401 {
        return true;
    }

    if response.is_success() || !response.body.contains("error_message") {
        return false;
    }

    serde_json::from_str::<JsonValue>(&response.body)
        .ok()
        .and_then(|body| body.get("errors").and_then(JsonValue::as_array).cloned())
        .is_some_and(|errors| {
            errors.iter().any(|e| {
                e.get("error_message")
                    .and_then(JsonValue::as_str)
                    .is_some_and(|m| m.trim_start().starts_with("401"))
            })
        })
}
