//! Request descriptors

use crate::decode::Parser;
use crate::http::HttpRequest;
use crate::types::{Method, ParameterEncoding, StringMap};
use url::Url;

/// One HTTP call plus the parser for its payload
///
/// Consumed by the executor; rebuild it to send the same call again.
#[derive(Debug)]
pub struct RequestDescriptor<T> {
    /// Target URL
    pub url: Url,
    /// HTTP method
    pub method: Method,
    /// Request parameters
    pub parameters: Option<StringMap>,
    /// Where the parameters are placed
    pub encoding: ParameterEncoding,
    /// Payload parser
    pub parse: Parser<T>,
}

impl<T> RequestDescriptor<T> {
    /// Create a descriptor with the method's default parameter placement
    pub fn new(method: Method, url: Url, parse: Parser<T>) -> Self {
        Self {
            url,
            method,
            parameters: None,
            encoding: method.default_encoding(),
            parse,
        }
    }

    /// Create a GET descriptor
    pub fn get(url: Url, parse: Parser<T>) -> Self {
        Self::new(Method::GET, url, parse)
    }

    /// Create a POST descriptor
    pub fn post(url: Url, parse: Parser<T>) -> Self {
        Self::new(Method::POST, url, parse)
    }

    /// Create a PUT descriptor
    pub fn put(url: Url, parse: Parser<T>) -> Self {
        Self::new(Method::PUT, url, parse)
    }

    /// Replace all parameters
    #[must_use]
    pub fn parameters(mut self, parameters: StringMap) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Add a single parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(StringMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Override the parameter placement
    #[must_use]
    pub fn encoding(mut self, encoding: ParameterEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Split into the wire request and the payload parser
    pub fn into_parts(self) -> (HttpRequest, Parser<T>) {
        let request = HttpRequest {
            method: self.method,
            url: self.url,
            parameters: self.parameters.unwrap_or_default(),
            encoding: self.encoding,
        };
        (request, self.parse)
    }
}
