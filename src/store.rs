//! Canonical in-process match list with optimistic writes.

use chrono::NaiveDate;
use tracing::{instrument, warn};

use crate::cache::CacheMirror;
use crate::model::MatchRecord;
use crate::ScoreboardClient;

/// Holds the match history, mirrors it to the local cache, and pushes new
/// records to the backend without waiting for acknowledgement.
///
/// Mutation is append-only: records are never edited or deleted, and the list
/// is only replaced wholesale by [`MatchStore::load_initial`]. A failed remote
/// create leaves the record in the local list (no rollback, no retry), so
/// local and remote state can diverge until the next full load.
#[derive(Debug, Default)]
pub struct MatchStore {
    matches: Vec<MatchRecord>,
    cache: Option<CacheMirror>,
}

impl MatchStore {
    /// An empty store with no cache mirror.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store mirroring every non-empty change to the given cache.
    pub fn with_cache(cache: CacheMirror) -> Self {
        Self {
            matches: Vec::new(),
            cache: Some(cache),
        }
    }

    /// The current match history, in insertion order.
    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Replace the history with the backend's collection.
    ///
    /// A failed fetch resolves to an empty list: the error is logged, never
    /// returned. Callers see the same empty store as a backend with no data.
    #[instrument(skip(self, client))]
    pub async fn load_initial(&mut self, client: &ScoreboardClient) {
        match client.get_matches().await {
            Ok(matches) => {
                self.matches = matches;
                self.mirror();
            }
            Err(error) => {
                warn!(%error, "initial match load failed, starting empty");
                self.matches.clear();
            }
        }
    }

    /// Append a record locally and refresh the cache mirror.
    pub fn append(&mut self, record: MatchRecord) {
        self.matches.push(record);
        self.mirror();
    }

    /// Record a newly played match: build the record, kick off the remote
    /// create without awaiting it, and append locally right away.
    ///
    /// The spawned create logs a warning on failure; the local copy is kept
    /// either way. Must be called from within a Tokio runtime.
    #[instrument(skip(self, client))]
    pub fn submit(
        &mut self,
        client: &ScoreboardClient,
        date: NaiveDate,
        player_a_score: u8,
        player_b_score: u8,
    ) -> MatchRecord {
        let match_number = self.matches.len() as u32 + 1;
        let record = MatchRecord::new(date, player_a_score, player_b_score, match_number);

        let remote = client.clone();
        let pending = record.clone();
        tokio::spawn(async move {
            if let Err(error) = remote.create_match(&pending).await {
                warn!(
                    %error,
                    match_number = pending.match_number,
                    "match create failed, keeping local copy"
                );
            }
        });

        self.append(record.clone());
        record
    }

    fn mirror(&self) {
        let Some(cache) = &self.cache else {
            return;
        };
        if self.matches.is_empty() {
            return;
        }
        if let Err(error) = cache.write(&self.matches) {
            warn!(%error, "cache mirror write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Nothing listens on this port; remote calls fail fast.
    fn unreachable_client() -> ScoreboardClient {
        ScoreboardClient::new("http://127.0.0.1:9")
    }

    #[test]
    fn append_grows_history_in_order() {
        let mut store = MatchStore::new();
        store.append(MatchRecord::new(date(2024, 2, 1), 2, 1, 1));
        store.append(MatchRecord::new(date(2024, 2, 2), 0, 0, 2));

        let numbers: Vec<u32> = store.matches().iter().map(|m| m.match_number).collect();
        assert_eq!(numbers, [1, 2]);
    }

    #[test]
    fn append_mirrors_to_cache() {
        let dir = TempDir::new().unwrap();
        let mirror = CacheMirror::in_dir(dir.path());
        let path = mirror.path().to_path_buf();
        let mut store = MatchStore::with_cache(mirror);

        store.append(MatchRecord::new(date(2024, 2, 1), 3, 2, 1));

        let raw = std::fs::read_to_string(path).unwrap();
        let parsed: Vec<MatchRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, store.matches());
    }

    #[tokio::test]
    async fn submit_appends_optimistically() {
        let client = unreachable_client();
        let mut store = MatchStore::new();

        let first = store.submit(&client, date(2024, 2, 1), 4, 1);
        let second = store.submit(&client, date(2024, 2, 2), 1, 1);

        assert_eq!(first.match_number, 1);
        assert_eq!(second.match_number, 2);
        assert_eq!(store.matches().len(), 2);
        assert_eq!(store.matches()[0], first);
        assert_eq!(store.matches()[1], second);
    }

    #[tokio::test]
    async fn load_failure_resolves_to_empty() {
        let client = unreachable_client();
        let mut store = MatchStore::new();
        store.append(MatchRecord::new(date(2024, 2, 1), 1, 0, 1));

        store.load_initial(&client).await;

        assert!(store.matches().is_empty());
    }
}
