//! Cache store for the fetched postal snapshot
//!
//! Persists a single JSON snapshot (`postal.json`) in an XDG-compliant cache
//! directory. Freshness is judged by the file's modification time, not by a
//! timestamp inside the payload: a snapshot younger than the TTL is returned
//! as-is and no network access happens.

use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use crate::postal::PostalSnapshot;

/// Maximum age of a cached snapshot before a refresh is attempted
pub const CACHE_TTL: Duration = Duration::from_secs(4 * 3600);

/// Reads and writes the cached postal snapshot.
///
/// The whole fetch result is written as one document, so the cache is either
/// a complete snapshot or absent. A failed fetch is persisted as an empty
/// snapshot that stays "fresh" for the full TTL (negative caching).
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Path of the snapshot file
    path: PathBuf,
    /// Snapshot age at which a refresh is required
    ttl: Duration,
}

impl CacheStore {
    /// Creates a CacheStore at the XDG-compliant cache path
    /// (`~/.cache/postbar/postal.json` on Linux).
    ///
    /// Returns `None` if the cache directory cannot be determined
    /// (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "postbar")?;
        let path = project_dirs.cache_dir().join("postal.json");
        Some(Self {
            path,
            ttl: CACHE_TTL,
        })
    }

    /// Creates a CacheStore at a custom path. Useful for testing.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            ttl: CACHE_TTL,
        }
    }

    /// Overrides the TTL. Useful for testing expiry behavior.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Age of the cached snapshot, from the file's modification time.
    fn age(&self) -> Option<Duration> {
        let modified = fs::metadata(&self.path).ok()?.modified().ok()?;
        SystemTime::now().duration_since(modified).ok()
    }

    /// Returns the cached snapshot if it exists, parses, and is younger than
    /// the TTL. A stale, absent, or unreadable snapshot yields `None`.
    pub fn read_fresh(&self) -> Option<PostalSnapshot> {
        if self.age()? >= self.ttl {
            return None;
        }
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Persists a snapshot as a pretty-printed JSON document, replacing any
    /// previous one. The parent directory is created if missing.
    pub fn write(&self, snapshot: &PostalSnapshot) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}
