//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::resources::SearchQuery;
use crate::response::PaginatedApiResponse;
use futures::StreamExt;
use serde::Serialize;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Client::new(self.load_config()?)?;

        match &self.cli.command {
            Commands::Track { id } => {
                let track = client.track(*id).await.into_result()?;
                self.output(&track)
            }
            Commands::Tracks { ids } => {
                for track in client.tracks(ids).await.into_result()? {
                    self.output(&track)?;
                }
                Ok(())
            }
            Commands::Search {
                query,
                tags,
                genres,
                license,
                bpm_from,
                bpm_to,
                pages,
            } => {
                let mut queries = Vec::new();
                if let Some(query) = query {
                    queries.push(SearchQuery::Query(query.clone()));
                }
                if !tags.is_empty() {
                    queries.push(SearchQuery::Tags(tags.clone()));
                }
                if !genres.is_empty() {
                    queries.push(SearchQuery::Genres(genres.clone()));
                }
                if let Some(license) = license {
                    queries.push(SearchQuery::License(license.clone()));
                }
                if bpm_from.is_some() || bpm_to.is_some() {
                    queries.push(SearchQuery::Bpm {
                        from: *bpm_from,
                        to: *bpm_to,
                    });
                }
                self.output_pages(client.search_tracks(&queries).await, *pages)
                    .await
            }
            Commands::Comments { track_id, pages } => {
                self.output_pages(client.comments(*track_id).await, *pages)
                    .await
            }
            Commands::Favoriters { track_id, pages } => {
                self.output_pages(client.favoriters(*track_id).await, *pages)
                    .await
            }
        }
    }

    /// Load configuration, letting flags override the file
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match (&self.cli.config, &self.cli.client_id) {
            (Some(path), _) => ClientConfig::from_file(path)?,
            (None, Some(client_id)) => ClientConfig::new(client_id.clone()),
            (None, None) => {
                return Err(Error::config(
                    "No client ID given (use --config or --client-id)",
                ))
            }
        };

        if let Some(client_id) = &self.cli.client_id {
            config.client_id.clone_from(client_id);
        }
        if let Some(api_url) = &self.cli.api_url {
            config = config.with_api_url(api_url.clone());
        }

        config.validate()?;
        Ok(config)
    }

    /// Print every item of up to `limit` pages
    async fn output_pages<T>(&self, first: PaginatedApiResponse<T>, limit: usize) -> Result<()>
    where
        T: Serialize + Send + 'static,
    {
        let mut pages = std::pin::pin!(first.into_pages().take(limit));
        let mut fetched = 0;

        while let Some(page) = pages.next().await {
            fetched += 1;
            for item in page? {
                self.output(&item)?;
            }
        }

        debug!(pages = fetched, "Done");
        Ok(())
    }

    /// Output a value
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{line}");
        Ok(())
    }
}
