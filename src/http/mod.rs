//! HTTP transport module
//!
//! The request pipeline talks to the network only through the [`Transport`]
//! trait. [`HttpClient`] is the reqwest-backed implementation; tests swap in
//! their own transports to count or script calls.
//!
//! # Parameter placement
//!
//! - **Query**: parameters appended to the URL (GET, PUT, DELETE)
//! - **Form**: parameters form-encoded in the body (POST)

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use transport::{HttpRequest, HttpResponse, Transport};

#[cfg(test)]
mod tests;
