//! Content fingerprints for puzzle input and solver code
//!
//! Every fingerprint is a lowercase hex SHA-256 digest, so values are stable
//! across processes and platforms and can be used directly as file names.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;
use std::time::UNIX_EPOCH;
use tracing::debug;

use crate::solver::Level;

/// A 256-bit content hash rendered as 64 lowercase hex characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentFingerprint(String);

impl ContentFingerprint {
    /// Hash an arbitrary byte sequence
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(Sha256::digest(bytes)))
    }

    /// The hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ContentFingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fingerprint of raw puzzle input, taken verbatim as UTF-8 bytes
pub fn hash_input(text: &str) -> ContentFingerprint {
    ContentFingerprint::of_bytes(text.as_bytes())
}

/// Derive the cache key for one computation request
///
/// The key is the hash of `"{day}:{level}:{input}:{solver}"`. An absent solver
/// fingerprint contributes an empty segment.
pub fn hash_cache_key(
    day: u8,
    level: Level,
    input: &ContentFingerprint,
    solver: Option<&ContentFingerprint>,
) -> ContentFingerprint {
    let solver = solver.map(ContentFingerprint::as_str).unwrap_or_default();
    let combined = format!("{}:{}:{}:{}", day, level.number(), input, solver);
    ContentFingerprint::of_bytes(combined.as_bytes())
}

/// Strategy for fingerprinting a solver's compiled code
///
/// Called once per solver while the registry is built.
pub trait FingerprintSource: Send + Sync {
    /// Fingerprint for the solver registered under `name` for `day`
    fn fingerprint(&self, day: u8, name: &str) -> Option<ContentFingerprint>;
}

/// Fingerprints every solver by the modification time of the running executable
///
/// Any rebuild of the binary invalidates the cached results of all solvers.
#[derive(Debug, Clone)]
pub struct ExecutableTimestamp {
    fingerprint: Option<ContentFingerprint>,
}

impl ExecutableTimestamp {
    /// Stat the current executable
    pub fn new() -> Self {
        let fingerprint = std::env::current_exe()
            .ok()
            .and_then(|path| Self::of_path(&path));
        if fingerprint.is_none() {
            debug!("could not stat current executable, solver fingerprints will be empty");
        }
        Self { fingerprint }
    }

    /// Fingerprint a file by its modification time
    pub fn of_path(path: &Path) -> Option<ContentFingerprint> {
        let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok()?;
        let nanos = modified.duration_since(UNIX_EPOCH).ok()?.as_nanos();
        Some(ContentFingerprint::of_bytes(nanos.to_string().as_bytes()))
    }
}

impl Default for ExecutableTimestamp {
    fn default() -> Self {
        Self::new()
    }
}

impl FingerprintSource for ExecutableTimestamp {
    fn fingerprint(&self, _day: u8, _name: &str) -> Option<ContentFingerprint> {
        self.fingerprint.clone()
    }
}

/// Assigns the same caller-chosen fingerprint to every solver
#[derive(Debug, Clone)]
pub struct FixedFingerprint(ContentFingerprint);

impl FixedFingerprint {
    /// Fingerprint derived from a revision label
    pub fn new(revision: &str) -> Self {
        Self(ContentFingerprint::of_bytes(revision.as_bytes()))
    }
}

impl FingerprintSource for FixedFingerprint {
    fn fingerprint(&self, _day: u8, _name: &str) -> Option<ContentFingerprint> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_input("abc").as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_cache_key_matches_joined_string() {
        let input = hash_input("L68\nL30");
        let solver = FixedFingerprint::new("v1").fingerprint(1, "Day01").unwrap();
        let expected =
            ContentFingerprint::of_bytes(format!("1:2:{}:{}", input, solver).as_bytes());
        assert_eq!(hash_cache_key(1, Level::Two, &input, Some(&solver)), expected);
    }

    #[test]
    fn test_absent_solver_fingerprint_is_empty_segment() {
        let input = hash_input("x");
        let expected = ContentFingerprint::of_bytes(format!("3:1:{}:", input).as_bytes());
        assert_eq!(hash_cache_key(3, Level::One, &input, None), expected);
    }

    #[test]
    fn test_executable_timestamp_is_stable() {
        let a = ExecutableTimestamp::new();
        let b = ExecutableTimestamp::new();
        assert_eq!(a.fingerprint(1, "Day01"), b.fingerprint(2, "Day02"));
    }

    proptest! {
        #[test]
        fn prop_fingerprint_is_fixed_length_hex(text in ".*") {
            let fp = hash_input(&text);
            prop_assert_eq!(fp.as_str().len(), 64);
            prop_assert!(fp.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
            prop_assert_eq!(fp, hash_input(&text));
        }

        #[test]
        fn prop_any_byte_change_changes_fingerprint(text in "[a-z0-9\n]{1,64}", idx in any::<prop::sample::Index>()) {
            let mut bytes = text.clone().into_bytes();
            let i = idx.index(bytes.len());
            bytes[i] = if bytes[i] == b'#' { b'%' } else { b'#' };
            let changed = String::from_utf8(bytes).unwrap();
            prop_assert_ne!(hash_input(&text), hash_input(&changed));
        }

        #[test]
        fn prop_cache_key_separates_levels(day in 1u8..=25, text in ".*") {
            let input = hash_input(&text);
            prop_assert_ne!(
                hash_cache_key(day, Level::One, &input, None),
                hash_cache_key(day, Level::Two, &input, None)
            );
        }
    }
}
