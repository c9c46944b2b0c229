//! Snapshot storage for the last generated schedule.
//!
//! A store is a small key-value map from a fixed key to a serialized
//! [`Schedule`]. Reads never fail: a missing or unreadable snapshot is
//! reported as "nothing stored" and logged.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::Schedule;

/// Key used for the last generated schedule.
pub const DEFAULT_SNAPSHOT_KEY: &str = "padelMatches";

/// Key-value persistence for schedules.
pub trait ScheduleStore {
    /// Loads the schedule stored under `key`, if a readable one exists.
    fn get(&self, key: &str) -> Option<Schedule>;

    /// Stores `schedule` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, schedule: &Schedule) -> Result<()>;

    /// Removes the value under `key`. Removing a missing key is not an error.
    fn delete(&mut self, key: &str) -> Result<()>;
}

fn decode(key: &str, raw: &str) -> Option<Schedule> {
    match serde_json::from_str(raw) {
        Ok(schedule) => Some(schedule),
        Err(e) => {
            warn!(key, error = %e, "ignoring malformed schedule snapshot");
            None
        }
    }
}

/// In-memory store holding serialized snapshots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw snapshot text under `key` without checking it.
    pub fn with_raw(mut self, key: impl Into<String>, raw: impl Into<String>) -> Self {
        self.entries.insert(key.into(), raw.into());
        self
    }

    /// Raw snapshot text under `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ScheduleStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Schedule> {
        self.entries.get(key).and_then(|raw| decode(key, raw))
    }

    fn set(&mut self, key: &str, schedule: &Schedule) -> Result<()> {
        let raw = serde_json::to_string(schedule)?;
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `base_path`. The directory is created on
    /// first write.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.json"))
    }
}

impl ScheduleStore for FileStore {
    fn get(&self, key: &str) -> Option<Schedule> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => decode(key, &raw),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no schedule snapshot");
                None
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read schedule snapshot");
                None
            }
        }
    }

    fn set(&mut self, key: &str, schedule: &Schedule) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        let raw = serde_json::to_string_pretty(schedule)?;
        fs::write(self.path_for(key), raw)?;
        debug!(key, "schedule snapshot saved");
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Court, Round, Team};

    fn sample() -> Schedule {
        Schedule::new(vec![Round::new(vec![
            Court::new(Team::new("A", "D"), Team::new("G", "K")),
            Court::new(Team::new("B", "E"), Team::new("H", "L")),
            Court::new(Team::new("C", "F"), Team::new("I", "J")),
        ])])
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.get(DEFAULT_SNAPSHOT_KEY).is_none());

        store.set(DEFAULT_SNAPSHOT_KEY, &sample()).unwrap();
        assert_eq!(store.get(DEFAULT_SNAPSHOT_KEY), Some(sample()));
        assert!(store.raw(DEFAULT_SNAPSHOT_KEY).unwrap().starts_with("[[{\"teamA\""));

        store.delete(DEFAULT_SNAPSHOT_KEY).unwrap();
        assert!(store.get(DEFAULT_SNAPSHOT_KEY).is_none());
        store.delete(DEFAULT_SNAPSHOT_KEY).unwrap();
    }

    #[test]
    fn test_memory_store_malformed_is_none() {
        let store = MemoryStore::new()
            .with_raw("garbage", "{not json")
            .with_raw("wrong_shape", r#"[[{"teamA":["A"],"teamB":["B","C"]}]]"#)
            .with_raw("object", r#"{"rounds":[]}"#);
        assert!(store.get("garbage").is_none());
        assert!(store.get("wrong_shape").is_none());
        assert!(store.get("object").is_none());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        assert!(store.get("last").is_none());

        store.set("last", &sample()).unwrap();
        assert!(store.path_for("last").exists());
        assert_eq!(store.get("last"), Some(sample()));

        store.delete("last").unwrap();
        assert!(!store.path_for("last").exists());
        assert!(store.get("last").is_none());
        store.delete("last").unwrap();
    }

    #[test]
    fn test_file_store_malformed_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        fs::write(store.path_for("last"), "[[1, 2, 3]]").unwrap();
        assert!(store.get("last").is_none());
    }
}
