//! Request execution module
//!
//! A [`RequestDescriptor`] describes one HTTP call together with the parser
//! for its payload. The [`Executor`] sends it through a transport and turns
//! the raw response into a typed [`Execution`].
//!
//! # Status handling
//!
//! - **401** or a `401` error body: `Error::AuthExpired`
//! - **other non-2xx**: `Error::HttpStatus`
//! - **2xx**: body parsed as JSON, then handed to the descriptor's parser

mod descriptor;
mod executor;

pub use descriptor::RequestDescriptor;
pub use executor::{Execution, Executor, ResponseMeta};
