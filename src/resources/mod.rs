//! API resources
//!
//! Domain models and the track operations built on the request pipeline.
//!
//! | Operation | Request | Auth |
//! |-----------|---------|------|
//! | [`Client::track`](crate::Client::track) | `GET tracks/{id}.json` | no |
//! | [`Client::tracks`](crate::Client::tracks) | `GET tracks?ids=` | no |
//! | [`Client::search_tracks`](crate::Client::search_tracks) | `GET tracks` (paginated) | no |
//! | [`Client::comments`](crate::Client::comments) | `GET tracks/{id}/comments.json` (paginated) | no |
//! | [`Client::favoriters`](crate::Client::favoriters) | `GET tracks/{id}/favoriters.json` (paginated) | no |
//! | [`Client::comment`](crate::Client::comment) | `POST tracks/{id}/comments.json` | yes |
//! | [`Client::favorite`](crate::Client::favorite) | `PUT users/{uid}/favorites/{id}.json` | yes |

mod models;
mod search;
mod tracks;

pub use models::{Comment, Track, User};
pub use search::SearchQuery;

#[cfg(test)]
mod tests;
