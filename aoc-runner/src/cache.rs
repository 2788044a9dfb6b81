//! Persistent result cache keyed by input and solver fingerprints
//!
//! One JSON file per entry, stored flat in a single directory:
//! `{dir}/{cache_key}.json`. Every failure inside this module degrades to a
//! miss on read or a skipped write; nothing is surfaced to the caller as an
//! error.

use crate::error::CacheError;
use aoc_solver::{ContentFingerprint, Level, hash_cache_key};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// The identifying tuple of one computation request
#[derive(Debug, Clone, Copy)]
pub struct EntryKey<'a> {
    pub day: u8,
    pub level: Level,
    pub input: &'a ContentFingerprint,
    pub solver: Option<&'a ContentFingerprint>,
}

impl EntryKey<'_> {
    /// Hash of the full tuple, used as the entry's file name
    pub fn cache_key(&self) -> ContentFingerprint {
        hash_cache_key(self.day, self.level, self.input, self.solver)
    }

    fn solver_str(&self) -> &str {
        self.solver.map(ContentFingerprint::as_str).unwrap_or_default()
    }
}

/// On-disk record; key fields are duplicated so reads can be re-validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheRecord {
    pub day: u8,
    pub level: u8,
    pub input_hash: String,
    pub solution_hash: String,
    pub answer: String,
    pub timestamp: DateTime<Utc>,
}

impl CacheRecord {
    fn matches(&self, key: &EntryKey<'_>) -> bool {
        self.day == key.day
            && self.level == key.level.number()
            && self.input_hash == key.input.as_str()
            && self.solution_hash == key.solver_str()
    }
}

/// Result of reading one entry
#[derive(Debug)]
pub enum CacheLookup {
    /// A valid entry for exactly this request
    Hit(CacheRecord),
    /// No entry file
    Miss,
    /// An entry exists but its stored fingerprints differ
    Mismatch,
    /// The entry could not be read or decoded
    Unreadable(CacheError),
}

impl CacheLookup {
    /// The cached answer, treating everything but a hit as absent
    pub fn into_answer(self) -> Option<String> {
        match self {
            CacheLookup::Hit(record) => Some(record.answer),
            _ => None,
        }
    }
}

/// Result of writing one entry
#[derive(Debug)]
pub enum CacheWrite {
    /// Entry written to the given path
    Stored(PathBuf),
    /// Entry not written; the error has already been logged
    Skipped(CacheError),
}

/// File-based cache of solver answers
///
/// Safe to share across threads: reads are independent file accesses, and each
/// write goes to a private temporary file that is atomically renamed over the
/// entry, so a reader never observes a partial record.
#[derive(Debug, Clone)]
pub struct ResultCache {
    dir: PathBuf,
}

impl ResultCache {
    /// Open a cache rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!(dir = %dir.display(), error = %e, "could not create cache directory");
        } else {
            debug!(dir = %dir.display(), "cache directory ready");
        }
        Self { dir }
    }

    /// The cache directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for an entry
    pub fn entry_path(&self, cache_key: &ContentFingerprint) -> PathBuf {
        self.dir.join(format!("{}.json", cache_key))
    }

    /// Read and validate the entry for a request
    pub fn lookup(&self, key: &EntryKey<'_>) -> CacheLookup {
        let path = self.entry_path(&key.cache_key());

        let lookup = match self.read_record(&path) {
            Ok(None) => CacheLookup::Miss,
            Ok(Some(record)) if record.matches(key) => CacheLookup::Hit(record),
            Ok(Some(_)) => CacheLookup::Mismatch,
            Err(e) => CacheLookup::Unreadable(e),
        };

        match &lookup {
            CacheLookup::Hit(_) => debug!(day = key.day, level = %key.level, "cache hit"),
            CacheLookup::Miss => debug!(day = key.day, level = %key.level, "cache miss"),
            CacheLookup::Mismatch => {
                debug!(day = key.day, level = %key.level, "cache miss: fingerprint mismatch")
            }
            CacheLookup::Unreadable(e) => warn!(
                day = key.day,
                level = %key.level,
                path = %path.display(),
                error = %e,
                "error reading from cache"
            ),
        }
        lookup
    }

    /// Cached answer for a request, if a valid one exists
    pub fn get(&self, key: &EntryKey<'_>) -> Option<String> {
        self.lookup(key).into_answer()
    }

    /// Store an answer, replacing any existing entry for the same key
    pub fn put(&self, key: &EntryKey<'_>, answer: &str) -> CacheWrite {
        match self.write_record(key, answer) {
            Ok(path) => {
                debug!(day = key.day, level = %key.level, path = %path.display(), "cached result");
                CacheWrite::Stored(path)
            }
            Err(e) => {
                warn!(day = key.day, level = %key.level, error = %e, "error writing to cache");
                CacheWrite::Skipped(e)
            }
        }
    }

    fn read_record(&self, path: &Path) -> Result<Option<CacheRecord>, CacheError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn write_record(&self, key: &EntryKey<'_>, answer: &str) -> Result<PathBuf, CacheError> {
        fs::create_dir_all(&self.dir)?;

        let record = CacheRecord {
            day: key.day,
            level: key.level.number(),
            input_hash: key.input.to_string(),
            solution_hash: key.solver_str().to_string(),
            answer: answer.to_string(),
            timestamp: Utc::now(),
        };

        // Temp file in the same directory so the rename stays on one filesystem
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut tmp, &record)?;
        tmp.flush()?;

        let path = self.entry_path(&key.cache_key());
        tmp.persist(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::hash_input;
    use tempfile::TempDir;

    fn key<'a>(
        input: &'a ContentFingerprint,
        solver: Option<&'a ContentFingerprint>,
    ) -> EntryKey<'a> {
        EntryKey {
            day: 1,
            level: Level::One,
            input,
            solver,
        }
    }

    #[test]
    fn test_missing_entry_is_miss() {
        let temp = TempDir::new().unwrap();
        let cache = ResultCache::new(temp.path());
        let input = hash_input("abc");

        assert!(matches!(cache.lookup(&key(&input, None)), CacheLookup::Miss));
        assert_eq!(cache.get(&key(&input, None)), None);
    }

    #[test]
    fn test_put_then_get() {
        let temp = TempDir::new().unwrap();
        let cache = ResultCache::new(temp.path());
        let input = hash_input("abc");
        let solver = hash_input("solver-v1");

        let written = cache.put(&key(&input, Some(&solver)), "42");
        assert!(matches!(written, CacheWrite::Stored(_)));
        assert_eq!(cache.get(&key(&input, Some(&solver))), Some("42".to_string()));
    }

    #[test]
    fn test_record_format() {
        let temp = TempDir::new().unwrap();
        let cache = ResultCache::new(temp.path());
        let input = hash_input("abc");
        let solver = hash_input("solver-v1");
        let entry = key(&input, Some(&solver));

        let CacheWrite::Stored(path) = cache.put(&entry, "42") else {
            panic!("write failed");
        };
        assert_eq!(path, cache.entry_path(&entry.cache_key()));
        assert_eq!(path.extension().unwrap(), "json");

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["day"], 1);
        assert_eq!(json["level"], 1);
        assert_eq!(json["inputHash"], input.as_str());
        assert_eq!(json["solutionHash"], solver.as_str());
        assert_eq!(json["answer"], "42");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_overwrite_last_write_wins() {
        let temp = TempDir::new().unwrap();
        let cache = ResultCache::new(temp.path());
        let input = hash_input("abc");

        cache.put(&key(&input, None), "first");
        cache.put(&key(&input, None), "second");
        assert_eq!(cache.get(&key(&input, None)), Some("second".to_string()));

        // Only the entry remains, no stray temporary files
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_stored_fingerprint_mismatch_is_treated_as_absent() {
        let temp = TempDir::new().unwrap();
        let cache = ResultCache::new(temp.path());
        let input = hash_input("abc");
        let entry = key(&input, None);

        let CacheWrite::Stored(path) = cache.put(&entry, "42") else {
            panic!("write failed");
        };

        // Simulate a key collision: same file name, different stored input hash
        let mut record: CacheRecord =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        record.input_hash = hash_input("other").to_string();
        fs::write(&path, serde_json::to_string(&record).unwrap()).unwrap();

        assert!(matches!(cache.lookup(&entry), CacheLookup::Mismatch));
        assert_eq!(cache.get(&entry), None);
    }

    #[test]
    fn test_corrupt_entry_is_treated_as_absent() {
        let temp = TempDir::new().unwrap();
        let cache = ResultCache::new(temp.path());
        let input = hash_input("abc");
        let entry = key(&input, None);

        fs::write(cache.entry_path(&entry.cache_key()), "{\"day\": 1, \"lev").unwrap();

        assert!(matches!(cache.lookup(&entry), CacheLookup::Unreadable(CacheError::Json(_))));
        assert_eq!(cache.get(&entry), None);
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("cache");
        let cache = ResultCache::new(&dir);
        assert!(dir.is_dir());
        assert_eq!(cache.dir(), dir.as_path());
    }

    #[test]
    fn test_unwritable_location_is_skipped() {
        let temp = TempDir::new().unwrap();
        // A regular file where the directory should be
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let cache = ResultCache::new(blocker.join("cache"));
        let input = hash_input("abc");

        assert!(matches!(cache.put(&key(&input, None), "42"), CacheWrite::Skipped(_)));
        assert_eq!(cache.get(&key(&input, None)), None);
    }
}
