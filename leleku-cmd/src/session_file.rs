//! JSON file session store.
//!
//! Plays the role of the browser cookie: the record carries its own expiry and
//! an expired record reads as "no session".

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use leleku_core::error::SessionError;
use leleku_core::session::SessionStore;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct SessionRecord {
    token: String,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read(&self) -> Result<Option<SessionRecord>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }
}

impl SessionStore for FileSession {
    fn token(&self) -> Option<String> {
        match self.read() {
            Ok(Some(record)) if record.expires_at > Utc::now() => Some(record.token),
            Ok(_) => None,
            Err(e) => {
                warn!("ignoring session file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&self, token: &str, ttl: Duration) -> Result<(), SessionError> {
        let record = SessionRecord {
            token: token.to_string(),
            expires_at: Utc::now() + ttl,
        };
        fs::write(&self.path, serde_json::to_string_pretty(&record)?)?;
        Ok(())
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("could not remove {}: {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSession::new(dir.path().join("session.json"));
        assert_eq!(store.token(), None);

        store.save("jwt.abc", Duration::days(1)).unwrap();
        assert_eq!(store.token().as_deref(), Some("jwt.abc"));

        store.clear();
        assert_eq!(store.token(), None);
        // Clearing twice is fine
        store.clear();
    }

    #[test]
    fn test_expired_record_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSession::new(dir.path().join("session.json"));
        store.save("jwt.old", Duration::seconds(-5)).unwrap();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_corrupt_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(FileSession::new(&path).token(), None);
    }
}
