//! Write-only local mirror of the match list.
//!
//! The mirror is a single JSON slot on disk, overwritten wholesale every time
//! the in-memory list changes while non-empty. Nothing in this crate reads it
//! back; it exists for surrounding tooling to pick up.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScoreboardError};
use crate::model::MatchRecord;

/// Default file name for the cache slot.
pub const CACHE_SLOT: &str = "match-history.json";

/// File-backed write-only cache of the serialized match list.
#[derive(Debug, Clone)]
pub struct CacheMirror {
    path: PathBuf,
}

impl CacheMirror {
    /// Mirror into `match-history.json` under the given directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(CACHE_SLOT),
        }
    }

    /// Mirror into an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the mirror writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the slot with the full serialized list.
    ///
    /// Empty lists are skipped: the slot only ever reflects a non-empty
    /// history, so a fresh load that fails never clobbers an older mirror.
    pub fn write(&self, matches: &[MatchRecord]) -> Result<()> {
        if matches.is_empty() {
            return Ok(());
        }
        let payload = serde_json::to_vec(matches)?;
        fs::write(&self.path, payload).map_err(|source| ScoreboardError::CacheWrite {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;

    fn record(a: u8, b: u8, number: u32) -> MatchRecord {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        MatchRecord::new(date, a, b, number)
    }

    #[test]
    fn writes_full_list_as_json() {
        let dir = TempDir::new().unwrap();
        let mirror = CacheMirror::in_dir(dir.path());
        let matches = vec![record(2, 1, 1), record(0, 0, 2)];

        mirror.write(&matches).unwrap();

        let raw = std::fs::read_to_string(mirror.path()).unwrap();
        let parsed: Vec<MatchRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, matches);
    }

    #[test]
    fn overwrites_previous_slot() {
        let dir = TempDir::new().unwrap();
        let mirror = CacheMirror::in_dir(dir.path());

        mirror.write(&[record(1, 0, 1)]).unwrap();
        let updated = vec![record(1, 0, 1), record(3, 3, 2)];
        mirror.write(&updated).unwrap();

        let raw = std::fs::read_to_string(mirror.path()).unwrap();
        let parsed: Vec<MatchRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, updated);
    }

    #[test]
    fn skips_empty_list() {
        let dir = TempDir::new().unwrap();
        let mirror = CacheMirror::in_dir(dir.path());

        mirror.write(&[]).unwrap();

        assert!(!mirror.path().exists());
    }
}
