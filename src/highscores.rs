//! Best-effort persistent high score
//!
//! A single integer stored as JSON next to the executable. Reads that
//! fail for any reason count as "no high score yet"; writes that fail
//! are logged and skipped. Persistence problems never reach gameplay.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default store file name, looked up in the working directory
pub const DEFAULT_STORE_PATH: &str = "highscore.json";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct StoredScore {
    best: u32,
}

/// Handle to the persistent high score
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    /// Open the store, reading the current best once. Any read failure
    /// (missing file, corrupt content) yields a best of 0.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = load_best(&path);
        Self { path, best }
    }

    /// The best score seen so far
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a score, persisting only on a strictly greater value.
    /// Returns true if the stored best changed. A failed write keeps the
    /// new best in memory and logs a warning.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(err) = self.write() {
            log::warn!("high score save skipped: {err}");
        } else {
            log::info!("high score saved: {}", self.best);
        }
        true
    }

    fn write(&self) -> io::Result<()> {
        let json = serde_json::to_string(&StoredScore { best: self.best })?;
        std::fs::write(&self.path, json)
    }
}

fn load_best(path: &Path) -> u32 {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return 0,
        Err(err) => {
            log::warn!("failed to read high score store {}: {err}", path.display());
            return 0;
        }
    };

    match serde_json::from_str::<StoredScore>(&text) {
        Ok(stored) => stored.best,
        Err(err) => {
            log::warn!("ignoring corrupt high score store {}: {err}", path.display());
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gate_glider_{}_{name}.json", std::process::id()))
    }

    #[test]
    fn test_round_trip_through_fresh_open() {
        let path = temp_path("hs_roundtrip");
        std::fs::remove_file(&path).ok();

        let mut store = HighScoreStore::open(&path);
        assert_eq!(store.best(), 0);
        assert!(store.record(42));

        // A fresh handle simulates a new process
        let reopened = HighScoreStore::open(&path);
        assert_eq!(reopened.best(), 42);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_store_reads_zero() {
        let store = HighScoreStore::open(temp_path("hs_missing"));
        assert_eq!(store.best(), 0);
    }

    #[test]
    fn test_corrupt_store_reads_zero() {
        let path = temp_path("hs_corrupt");
        std::fs::write(&path, "not a number at all").unwrap();
        let store = HighScoreStore::open(&path);
        assert_eq!(store.best(), 0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_only_strictly_greater_persists() {
        let path = temp_path("hs_monotonic");
        std::fs::remove_file(&path).ok();

        let mut store = HighScoreStore::open(&path);
        assert!(store.record(10));
        assert!(!store.record(10));
        assert!(!store.record(7));
        assert_eq!(store.best(), 10);

        assert_eq!(HighScoreStore::open(&path).best(), 10);
        std::fs::remove_file(&path).ok();
    }
}
