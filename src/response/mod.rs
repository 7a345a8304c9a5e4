//! API response module
//!
//! - [`SimpleApiResponse`]: a single typed result
//! - [`PaginatedApiResponse`]: one page of a collection plus the means to
//!   fetch the next one
//!
//! # Overview
//!
//! Collection endpoints answer with an envelope carrying the page items and
//! the URL of the next page:
//!
//! ```text
//! { "collection": [ ... ], "next_href": "https://api.soundcloud.com/...&cursor=..." }
//! ```
//!
//! Advancing a paginated response never mutates it; every page is a new
//! response value.

mod envelope;
mod paginated;
mod simple;

pub use envelope::{Envelope, Page, PageParser};
pub use paginated::PaginatedApiResponse;
pub use simple::SimpleApiResponse;
