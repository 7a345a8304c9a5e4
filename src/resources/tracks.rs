//! Track operations

use super::models::{Comment, Track, User};
use super::search::{join_ids, SearchQuery};
use crate::client::Client;
use crate::decode::{self, items, json};
use crate::error::{Error, Result};
use crate::request::RequestDescriptor;
use crate::response::{PaginatedApiResponse, SimpleApiResponse};
use crate::types::JsonValue;
use std::time::Duration;
use tracing::debug;

impl Client {
    /// Load one track
    pub async fn track(&self, id: u64) -> SimpleApiResponse<Track> {
        let descriptor = match self.endpoint(&format!("tracks/{id}.json")) {
            Ok(url) => RequestDescriptor::get(url, json()).parameters(self.base_parameters()),
            Err(e) => return SimpleApiResponse::new(Err(e)),
        };
        self.simple(descriptor).await
    }

    /// Load several tracks by identifier
    ///
    /// One undecodable track fails the whole list.
    pub async fn tracks(&self, ids: &[u64]) -> SimpleApiResponse<Vec<Track>> {
        let descriptor = match self.endpoint("tracks") {
            Ok(url) => RequestDescriptor::get(url, items(json()))
                .parameters(self.base_parameters())
                .param("ids", join_ids(ids)),
            Err(e) => return SimpleApiResponse::new(Err(e)),
        };
        self.simple(descriptor).await
    }

    /// Search tracks matching every filter
    pub async fn search_tracks(&self, queries: &[SearchQuery]) -> PaginatedApiResponse<Track> {
        let mut parameters = self.base_parameters();
        for query in queries {
            query.apply(&mut parameters);
        }
        debug!(filters = queries.len(), "Searching tracks");
        self.paginated("tracks", parameters, json()).await
    }

    /// Load the comments of a track
    pub async fn comments(&self, track_id: u64) -> PaginatedApiResponse<Comment> {
        self.paginated(
            &format!("tracks/{track_id}/comments.json"),
            self.base_parameters(),
            json(),
        )
        .await
    }

    /// Load the users who favorited a track
    pub async fn favoriters(&self, track_id: u64) -> PaginatedApiResponse<User> {
        self.paginated(
            &format!("tracks/{track_id}/favoriters.json"),
            self.base_parameters(),
            json(),
        )
        .await
    }

    /// Comment on a track at `timestamp` into its playback
    ///
    /// Requires a session. `comment[timestamp]` is sent as whole
    /// milliseconds, e.g. `Duration::from_secs_f64(12.5)` becomes `12500`.
    pub async fn comment(
        &self,
        track_id: u64,
        body: &str,
        timestamp: Duration,
    ) -> SimpleApiResponse<Comment> {
        let path = format!("tracks/{track_id}/comments.json");
        let millis = timestamp.as_millis().to_string();

        self.authorized(|token| {
            let url = self.endpoint(&path)?;
            Ok(RequestDescriptor::post(url, json())
                .parameters(self.base_parameters())
                .param("oauth_token", token)
                .param("comment[body]", body)
                .param("comment[timestamp]", millis.as_str()))
        })
        .await
    }

    /// Add a track to a user's favorites
    ///
    /// Requires a session. Parameters go in the query string.
    pub async fn favorite(&self, user_id: u64, track_id: u64) -> SimpleApiResponse<bool> {
        let path = format!("users/{user_id}/favorites/{track_id}.json");

        self.authorized(|token| {
            let url = self.endpoint(&path)?;
            Ok(RequestDescriptor::put(url, decode::with(favorite_status))
                .parameters(self.base_parameters())
                .param("oauth_token", token))
        })
        .await
    }
}

/// The API answers a favorite with `{"status": "200 - OK"}` or `"201 - Created"`
fn favorite_status(value: &JsonValue) -> Result<bool> {
    let status = value.get("status").and_then(JsonValue::as_str).unwrap_or_default();
    if status.contains(" OK") || status.contains(" Created") {
        Ok(true)
    } else {
        Err(Error::decode(format!("unexpected favorite status '{status}'")))
    }
}
