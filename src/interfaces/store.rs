//! High-score stores.

use super::HighScoreStore;
use crate::core::constants::HIGH_SCORE_FILE;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// On-disk form. A bare integer (the legacy plain-text format) is also accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum HighScoreRecord {
    Record { high_score: u32 },
    Bare(u32),
}

impl Default for HighScoreRecord {
    fn default() -> Self {
        Self::Bare(0)
    }
}

impl HighScoreRecord {
    fn score(self) -> u32 {
        match self {
            Self::Record { high_score } | Self::Bare(high_score) => high_score,
        }
    }
}

/// High score kept as JSON on disk.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.flappy/highscore.json`.
    pub fn in_data_dir() -> io::Result<Self> {
        Ok(Self::new(persistence::save_path(HIGH_SCORE_FILE)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&mut self) -> u32 {
        let record: HighScoreRecord = persistence::load_json_or_default(&self.path);
        record.score()
    }

    fn save(&mut self, score: u32) {
        let record = HighScoreRecord::Record { high_score: score };
        match persistence::save_json(&self.path, &record) {
            Ok(()) => tracing::debug!(score, path = %self.path.display(), "saved high score"),
            Err(err) => {
                tracing::warn!(score, path = %self.path.display(), "failed to save high score: {}", err)
            }
        }
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    high_score: u32,
    saves: Vec<u32>,
}

/// In-memory store that remembers every save. Clones share state, so a caller
/// can keep a handle after handing one to a session.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryHighScoreStore {
    pub fn new(high_score: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryInner {
                high_score,
                saves: Vec::new(),
            })),
        }
    }

    pub fn high_score(&self) -> u32 {
        self.inner.borrow().high_score
    }

    /// Every value passed to `save`, oldest first.
    pub fn saves(&self) -> Vec<u32> {
        self.inner.borrow().saves.clone()
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&mut self) -> u32 {
        self.inner.borrow().high_score
    }

    fn save(&mut self, score: u32) {
        let mut inner = self.inner.borrow_mut();
        inner.high_score = score;
        inner.saves.push(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileHighScoreStore::new(dir.path().join("highscore.json"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_malformed_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        fs::write(&path, "twelve").unwrap();
        let mut store = FileHighScoreStore::new(&path);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_legacy_bare_integer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "12\n").unwrap();
        let mut store = FileHighScoreStore::new(&path);
        assert_eq!(store.load(), 12);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileHighScoreStore::new(dir.path().join("highscore.json"));
        store.save(31);
        assert_eq!(store.load(), 31);

        let json = fs::read_to_string(store.path()).unwrap();
        assert!(json.contains("\"high_score\": 31"));
    }

    #[test]
    fn test_unwritable_path_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();
        let mut store = FileHighScoreStore::new(&path);
        store.save(5);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_memory_store_shares_state() {
        let handle = MemoryHighScoreStore::new(3);
        let mut store = handle.clone();
        assert_eq!(store.load(), 3);
        store.save(4);
        store.save(5);
        assert_eq!(handle.high_score(), 5);
        assert_eq!(handle.saves(), vec![4, 5]);
    }
}
