//! Track search filters

use crate::types::StringMap;

/// One search filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Free text
    Query(String),
    /// Tracks carrying any of these tags
    Tags(Vec<String>),
    /// Tracks in any of these genres
    Genres(Vec<String>),
    /// License name (e.g. "cc-by")
    License(String),
    /// Beats per minute range
    Bpm { from: Option<u32>, to: Option<u32> },
    /// Duration range in milliseconds
    Duration { from: Option<u64>, to: Option<u64> },
    /// Restrict to these track identifiers
    Ids(Vec<u64>),
}

impl SearchQuery {
    /// Write this filter's parameters into `parameters`
    pub fn apply(&self, parameters: &mut StringMap) {
        match self {
            SearchQuery::Query(text) => insert(parameters, "q", text.clone()),
            SearchQuery::Tags(tags) => insert(parameters, "tags", tags.join(",")),
            SearchQuery::Genres(genres) => insert(parameters, "genres", genres.join(",")),
            SearchQuery::License(license) => insert(parameters, "license", license.clone()),
            SearchQuery::Bpm { from, to } => {
                range(parameters, "bpm", from.map(u64::from), to.map(u64::from));
            }
            SearchQuery::Duration { from, to } => range(parameters, "duration", *from, *to),
            SearchQuery::Ids(ids) => insert(parameters, "ids", join_ids(ids)),
        }
    }
}

/// Comma-separated identifiers
pub(crate) fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn insert(parameters: &mut StringMap, key: &str, value: String) {
    parameters.insert(key.to_string(), value);
}

fn range(parameters: &mut StringMap, key: &str, from: Option<u64>, to: Option<u64>) {
    if let Some(from) = from {
        insert(parameters, &format!("{key}[from]"), from.to_string());
    }
    if let Some(to) = to {
        insert(parameters, &format!("{key}[to]"), to.to_string());
    }
}
