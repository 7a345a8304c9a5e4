//! Response decoder module
//!
//! A [`Parser`] turns a JSON payload into a typed value or fails with
//! `Error::Decode`. Parsers are plain values so they can be stored on a
//! descriptor or a paginated response and reused for every page.

mod decoders;
mod types;

pub use decoders::{items, json, with};
pub use types::Parser;
