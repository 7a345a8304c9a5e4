//! Transport abstraction
//!
//! Requests and responses are described as plain data so that the executor
//! does not depend on a particular HTTP stack.

use crate::error::Result;
use crate::types::{Method, ParameterEncoding, StringMap};
use async_trait::async_trait;
use url::Url;

/// An HTTP request described as plain data
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Target URL (may already carry a query string)
    pub url: Url,
    /// Request parameters
    pub parameters: StringMap,
    /// Where the parameters are placed
    pub encoding: ParameterEncoding,
}

impl HttpRequest {
    /// Create a request with no parameters
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            parameters: StringMap::new(),
            encoding: method.default_encoding(),
        }
    }

    /// Add a parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Override the parameter placement
    #[must_use]
    pub fn encoding(mut self, encoding: ParameterEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// An HTTP response described as plain data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// Raw body
    pub body: String,
}

impl HttpResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests over the wire
///
/// Returns `Err(Error::Network)` only when no response was produced. Any
/// response, including 4xx and 5xx, is returned as `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and wait for the response
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse>;
}
