//! CLI module
//!
//! Command-line interface over the track operations.
//!
//! # Commands
//!
//! - `track` - Load one track
//! - `tracks` - Load several tracks by id
//! - `search` - Search tracks
//! - `comments` - List the comments of a track
//! - `favoriters` - List the users who favorited a track

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
