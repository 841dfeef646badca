//! Durable storage for the session log
//!
//! One flat JSON document, rewritten in full after every completed
//! session. There is no atomic rename and no backup: an interrupted
//! write can corrupt the file. Acceptable at this scale, but known.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::SessionLog;
use crate::error::StoreError;
use crate::utils::debug_enabled;

pub(crate) struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means an empty store. Anything else that goes wrong
    /// (unreadable file, corrupt JSON) is fatal; no repair is attempted.
    pub(crate) fn load(&self) -> Result<SessionLog, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SessionLog::default()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        let log: SessionLog =
            serde_json::from_str(&content).map_err(|e| StoreError::Parse {
                path: self.path.clone(),
                source: e,
            })?;
        if debug_enabled() && !log.is_consistent() {
            eprintln!(
                "[debug] counters in {} disagree with the log length (total_count={}, logs={})",
                self.path.display(),
                log.total_count,
                log.logs.len()
            );
        }
        Ok(log)
    }

    /// Serializes with a 4-space indent, matching data files written by
    /// earlier versions of this tool.
    pub(crate) fn save(&self, log: &SessionLog) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        log.serialize(&mut ser).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: std::io::Error::other(e),
        })?;
        std::fs::write(&self.path, &buf).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record_completion;
    use chrono::NaiveDate;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("pomodoro_data.json"))
    }

    fn sample_log() -> SessionLog {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let started = today.and_hms_opt(9, 15, 0).unwrap();
        let log = record_completion(
            SessionLog::default(),
            "write paper",
            started,
            Some("went well".to_string()),
            today,
        );
        record_completion(log, "review PR", started, None, today)
    }

    #[test]
    fn missing_file_loads_as_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let log = store_in(&dir).load().unwrap();
        assert_eq!(log, SessionLog::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let log = sample_log();
        store.save(&log).unwrap();
        assert_eq!(store.load().unwrap(), log);
    }

    #[test]
    fn save_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&sample_log()).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\n    \"total_count\": 2"));
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();
        match store.load() {
            Err(StoreError::Parse { path, .. }) => assert_eq!(path, store.path()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn loads_legacy_document_without_notes() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            r#"{
    "daily_count": {
        "2024-06-05": 1
    },
    "total_count": 1,
    "logs": [
        {
            "task": "study",
            "datetime": "2024-06-05T14:30:00.123456"
        }
    ]
}"#,
        )
        .unwrap();
        let log = store.load().unwrap();
        assert_eq!(log.total_count, 1);
        assert_eq!(log.logs[0].notes, None);
        assert!(log.is_consistent());
        // Rewriting keeps the entry notes-free.
        store.save(&log).unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains("notes"));
    }
}
