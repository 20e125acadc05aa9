// ABOUTME: Session store — load and append completed jaap sessions as JSON.
// ABOUTME: Newest-first, capped at 100 entries, atomic file writes.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Retention cap: only the most recent sessions are kept.
pub const MAX_SESSIONS: usize = 100;

/// One completed chanting session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub deity: String,
    pub count: u32,
    pub timestamp: DateTime<Utc>,
}

impl Session {
    /// Create a session stamped with the current time.
    pub fn new(deity: impl Into<String>, count: u32) -> Self {
        Self {
            deity: deity.into(),
            count,
            timestamp: Utc::now(),
        }
    }
}

/// Reads and writes the ordered session list against a single file slot.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store backed by the default sessions file (~/.shanti/sessions.json).
    pub fn open_default() -> Self {
        Self::open(Config::sessions_path())
    }

    /// Store backed by an explicit path (for testing).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load all retained sessions, newest first. A missing file or a
    /// malformed blob yields an empty list.
    pub fn load(&self) -> Vec<Session> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Prepend a session, truncate to the retention cap, and persist.
    /// Returns the updated list.
    pub fn append(&self, session: Session) -> anyhow::Result<Vec<Session>> {
        let mut sessions = self.load();
        sessions.insert(0, session);
        sessions.truncate(MAX_SESSIONS);
        self.save(&sessions)?;
        Ok(sessions)
    }

    /// Remove the sessions file entirely.
    pub fn clear(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn save(&self, sessions: &[Session]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(sessions)?;
        std::fs::write(&tmp_path, &content)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Sum of counts across all retained sessions. Older evicted entries no
/// longer contribute, an accepted drift for a local-only log.
pub fn total_count(sessions: &[Session]) -> u64 {
    sessions.iter().map(|s| s.count as u64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> SessionStore {
        SessionStore::open(dir.join("sessions.json"))
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_malformed_blob_returns_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        std::fs::write(store.path(), "{ definitely not an array").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn append_prepends_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        store.append(Session::new("Ram", 11)).unwrap();
        let sessions = store.append(Session::new("Shiva", 21)).unwrap();

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].deity, "Shiva");
        assert_eq!(sessions[1].deity, "Ram");
    }

    #[test]
    fn append_truncates_at_cap() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        for i in 0..(MAX_SESSIONS as u32 + 5) {
            store.append(Session::new(format!("deity-{i}"), i)).unwrap();
        }

        let sessions = store.load();
        assert_eq!(sessions.len(), MAX_SESSIONS);
        // Newest entry survives, oldest five were evicted.
        assert_eq!(sessions[0].deity, format!("deity-{}", MAX_SESSIONS + 4));
        assert_eq!(sessions.last().unwrap().deity, "deity-5");
    }

    #[test]
    fn total_count_sums_retained_sessions() {
        let sessions = vec![
            Session::new("Ram", 11),
            Session::new("Krishna", 21),
            Session::new("Shiva", 108),
        ];
        assert_eq!(total_count(&sessions), 140);
        assert_eq!(total_count(&[]), 0);
    }

    #[test]
    fn sessions_roundtrip_through_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());

        let appended = store.append(Session::new("Hanuman", 108)).unwrap();
        let loaded = store.load();
        assert_eq!(loaded, appended);
        assert_eq!(loaded[0].count, 108);
    }

    #[test]
    fn timestamps_serialize_as_iso8601() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        store.append(Session::new("Ram", 11)).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let ts = value[0]["timestamp"].as_str().unwrap();
        assert!(ts.contains('T'), "expected ISO-8601 timestamp, got {ts}");
    }

    #[test]
    fn save_is_atomic() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        store.append(Session::new("Ram", 11)).unwrap();

        assert!(store.path().exists());
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn clear_removes_the_slot() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path());
        store.append(Session::new("Ram", 11)).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.load().is_empty());
    }
}
