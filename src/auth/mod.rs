//! Authentication module
//!
//! - [`SessionStore`]: shared handle to the logged-in session
//! - [`TokenRefresher`]: renews an expired access token
//! - [`AuthRetryCoordinator`]: runs authorized operations, refreshing the
//!   token and replaying the operation at most once when the API rejects it

mod coordinator;
mod refresher;
mod types;

pub use coordinator::AuthRetryCoordinator;
pub use refresher::{OAuth2Refresher, TokenRefresher};
pub use types::{Session, SessionStore};
