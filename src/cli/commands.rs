//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

/// SoundCloud API command-line client
#[derive(Parser, Debug)]
#[command(name = "soundcloud")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Application client ID (overrides the config file)
    #[arg(long, global = true)]
    pub client_id: Option<String>,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<Url>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load one track
    Track {
        /// Track identifier
        id: u64,
    },

    /// Load several tracks
    Tracks {
        /// Track identifiers (comma-separated)
        #[arg(value_delimiter = ',', required = true)]
        ids: Vec<u64>,
    },

    /// Search tracks
    Search {
        /// Free text query
        #[arg(short, long)]
        query: Option<String>,

        /// Tags (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Genres (comma-separated)
        #[arg(long, value_delimiter = ',')]
        genres: Vec<String>,

        /// License name
        #[arg(long)]
        license: Option<String>,

        /// Minimum BPM
        #[arg(long)]
        bpm_from: Option<u32>,

        /// Maximum BPM
        #[arg(long)]
        bpm_to: Option<u32>,

        /// Maximum number of pages to fetch
        #[arg(long, default_value = "1")]
        pages: usize,
    },

    /// List the comments of a track
    Comments {
        /// Track identifier
        track_id: u64,

        /// Maximum number of pages to fetch
        #[arg(long, default_value = "1")]
        pages: usize,
    },

    /// List the users who favorited a track
    Favoriters {
        /// Track identifier
        track_id: u64,

        /// Maximum number of pages to fetch
        #[arg(long, default_value = "1")]
        pages: usize,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one value per line)
    Json,
    /// Human-readable output
    Pretty,
}
