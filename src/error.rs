//! Error types for the SoundCloud SDK
//!
//! Every fallible step of the request pipeline (transport, decode, auth,
//! pagination) reports one of the variants below. `Error::kind` collapses
//! them into the coarse categories callers usually branch on.

use thiserror::Error;

/// The main error type for the SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Access token expired or was rejected")]
    AuthExpired,

    #[error("Token refresh failed: {message}")]
    TokenRefresh { message: String },

    #[error("Operation requires a session but none is active")]
    NoSession,

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("No more pages")]
    NoMorePages,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Coarse error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The transport never produced a response
    Network,
    /// The payload or request did not have the expected shape
    Generic,
    /// The API rejected the credential
    AuthExpired,
    /// Token renewal failed
    Refresh,
    /// An authorized operation ran without a session
    NoSession,
    /// A paginated response was advanced past its last page
    NoMorePages,
}

impl Error {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a token refresh error
    pub fn token_refresh(message: impl Into<String>) -> Self {
        Self::TokenRefresh {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Network { .. } | Error::Io(_) => ErrorKind::Network,
            Error::AuthExpired => ErrorKind::AuthExpired,
            Error::TokenRefresh { .. } => ErrorKind::Refresh,
            Error::NoSession => ErrorKind::NoSession,
            Error::NoMorePages => ErrorKind::NoMorePages,
            Error::HttpStatus { .. }
            | Error::InvalidUrl(_)
            | Error::Decode { .. }
            | Error::Config { .. }
            | Error::YamlParse(_)
            | Error::Other(_) => ErrorKind::Generic,
        }
    }

    /// Check if this error means the credential must be renewed
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Error::AuthExpired)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::decode(err.to_string())
        } else {
            Error::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::decode(err.to_string())
    }
}

/// Result type alias for the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
