//! TTL memoization of resolution results
//!
//! The prompt is re-rendered on every shell redraw, so directory-index
//! resolution (a file read and parse) is memoized per working directory
//! for a bounded time-to-live. A miss result is cached too; "nothing is
//! mapped here" is just as expensive to recompute.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::path::NormalizedDir;
use crate::resolve::ResolvedIdentity;

#[derive(Debug)]
struct CacheEntry {
    value: Option<ResolvedIdentity>,
    created_at: Instant,
}

/// Per-directory TTL cache of resolution results
///
/// Interior mutability behind a `Mutex` makes shared use within one
/// process safe; racing writers all compute the same deterministic value,
/// so last-writer-wins is fine.
#[derive(Debug)]
pub struct ResolutionCache {
    ttl: Duration,
    entries: Mutex<HashMap<NormalizedDir, CacheEntry>>,
}

impl ResolutionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh cached result for a directory, if any.
    ///
    /// The outer `Option` is hit/miss; the inner one is the cached
    /// resolution outcome. Entries older than the TTL are evicted and
    /// reported as misses.
    pub fn get(&self, dir: &NormalizedDir) -> Option<Option<ResolvedIdentity>> {
        let mut entries = self.lock();
        match entries.get(dir) {
            Some(entry) if entry.created_at.elapsed() <= self.ttl => {
                tracing::debug!(%dir, "cache hit");
                Some(entry.value.clone())
            }
            Some(_) => {
                tracing::debug!(%dir, "cache entry expired");
                entries.remove(dir);
                None
            }
            None => None,
        }
    }

    /// Store a resolution outcome for a directory.
    pub fn insert(&self, dir: NormalizedDir, value: Option<ResolvedIdentity>) {
        self.lock().insert(
            dir,
            CacheEntry {
                value,
                created_at: Instant::now(),
            },
        );
    }

    /// Cached result for a directory, computing and storing it on miss.
    pub fn get_or_insert_with(
        &self,
        dir: &NormalizedDir,
        resolve: impl FnOnce() -> Option<ResolvedIdentity>,
    ) -> Option<ResolvedIdentity> {
        if let Some(hit) = self.get(dir) {
            return hit;
        }
        let value = resolve();
        self.insert(dir.clone(), value.clone());
        value
    }

    /// Drop all entries. Idempotent, safe on an empty cache.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<NormalizedDir, CacheEntry>> {
        // A poisoned lock only means another caller panicked mid-insert;
        // the map itself is still usable.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
