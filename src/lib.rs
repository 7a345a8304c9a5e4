// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

//! # SoundCloud SDK
//!
//! An async client for the SoundCloud JSON API: typed single results,
//! paginated collections and transparent access-token refresh.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use soundcloud_sdk::{Client, ClientConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(ClientConfig::new("my-client-id"))?;
//!
//!     let track = client.track(13158665).await.into_result()?;
//!     println!("{}", track.title);
//!
//!     let comments = client.comments(track.id).await;
//!     if comments.has_next_page() {
//!         let more = comments.advance().await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │          Client: track / tracks / search / comments / ...       │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────┬──────────────────────────┐
//! │   Response   │         Auth          │         Request          │
//! ├──────────────┼───────────────────────┼──────────────────────────┤
//! │ Simple       │ SessionStore          │ RequestDescriptor        │
//! │ Paginated    │ AuthRetryCoordinator  │ Executor                 │
//! │ PageParser   │ TokenRefresher        │ Transport (reqwest)      │
//! └──────────────┴───────────────────────┴──────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP transport
pub mod http;

/// Payload parsers
pub mod decode;

/// Request descriptors and execution
pub mod request;

/// Single and paginated responses
pub mod response;

/// Sessions, token refresh and authorized retries
pub mod auth;

/// Client configuration
pub mod config;

/// API client context
pub mod client;

/// Track resources and models
pub mod resources;

/// Command-line interface
pub mod cli;

#[cfg(test)]
pub(crate) mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::Session;
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};
pub use resources::{Comment, SearchQuery, Track, User};
pub use response::{PaginatedApiResponse, SimpleApiResponse};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
