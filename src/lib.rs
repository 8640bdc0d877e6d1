pub use cache::{CacheMirror, CACHE_SLOT};
pub use error::{Result, ScoreboardError};
pub use model::*;
pub use store::MatchStore;

mod api;
pub mod cache;
pub mod error;
pub mod model;
pub mod stats;
pub mod store;

use tracing::instrument;

/// The main entry point for talking to a scoreboard backend.
///
/// `ScoreboardClient` wraps a [`reqwest::Client`] and a base URL, and exposes
/// the backend's two operations: fetch the full match collection and create a
/// single match. All derived views live in [`stats`] as pure functions and
/// need no client at all.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> scoreboard_client::Result<()> {
/// use scoreboard_client::{stats, MatchStore, ScoreboardClient};
///
/// let client = ScoreboardClient::new("https://scores.example.com");
/// let mut store = MatchStore::new();
/// store.load_initial(&client).await;
///
/// let overall = stats::overall(store.matches());
/// println!("{} matches, leader: {}", overall.total_matches, overall.current_leader);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScoreboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScoreboardClient {
    /// Create a new client for the backend at `base_url`, with default
    /// HTTP settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: trim_base_url(base_url.into()),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            http: client,
            base_url: trim_base_url(base_url.into()),
        }
    }

    /// Fetch every match the backend has recorded.
    #[instrument(skip(self))]
    pub async fn get_matches(&self) -> Result<Vec<MatchRecord>> {
        api::fetch_matches(&self.http, &self.base_url).await
    }

    /// Persist one match on the backend. The acknowledgement body is ignored.
    #[instrument(skip(self, record))]
    pub async fn create_match(&self, record: &MatchRecord) -> Result<()> {
        api::create_match(&self.http, &self.base_url, record).await
    }
}

fn trim_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slashes() {
        let client = ScoreboardClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
