//! Shared key-value scratch storage abstraction.
//!
//! During play the embedded Flash emulator persists its save state into an
//! origin-scoped, flat string-to-string store (`localStorage` in the browser).
//! The launcher shell reads the same store back out after play. This crate
//! provides:
//!
//! - [`ScratchStore`]: the store seam the shell and player share
//! - [`MemScratch`]: in-memory backend for native and test use
//! - [`ScopedScratch`]: adapter that namespaces all keys under a scope, for
//!   hosts that want per-game isolation instead of a single shared store
//! - [`Origin`]: the prefix that marks a key as belonging to the page origin

mod error;
mod mem;
mod scoped;

pub use crate::error::{Result, ScratchError};
pub use crate::mem::MemScratch;
pub use crate::scoped::ScopedScratch;

use std::collections::BTreeMap;

/// The origin string that prefixes every scratch key the emulator writes.
///
/// The store itself is origin-scoped by the browser; the prefix is how the
/// emulator namespaces its own entries within it. The shell treats every key
/// carrying this prefix as belonging to the currently active game.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Origin(String);

impl Origin {
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `key` belongs to this origin (prefix match).
    pub fn owns(&self, key: &str) -> bool {
        key.starts_with(&self.0)
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Flat string-to-string store shared between the shell and the emulator.
///
/// Reads are infallible; writes can fail (browser backends surface quota
/// exhaustion). Callers propagate write failures, they do not retry.
pub trait ScratchStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str);

    /// Drop every entry in the store, whatever origin prefix it carries.
    fn clear(&mut self);

    /// All keys currently present, in unspecified order.
    fn keys(&self) -> Vec<String>;

    fn len(&self) -> usize {
        self.keys().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every entry whose key belongs to `origin`.
    fn snapshot(&self, origin: &Origin) -> BTreeMap<String, String> {
        self.keys()
            .into_iter()
            .filter(|key| origin.owns(key))
            .filter_map(|key| self.get(&key).map(|value| (key, value)))
            .collect()
    }

    /// Write every entry of `entries` into the store.
    fn replay<'a, I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_owns_is_a_prefix_match() {
        let origin = Origin::new("example.test");
        assert!(origin.owns("example.test/save1"));
        assert!(origin.owns("example.test"));
        assert!(!origin.owns("other.test/save1"));
        assert!(!origin.owns("prefix-example.test"));
    }

    #[test]
    fn snapshot_filters_foreign_keys() {
        let origin = Origin::new("example.test");
        let mut store = MemScratch::new();
        store.set("example.test/slot", "a").unwrap();
        store.set("stray", "b").unwrap();

        let snap = store.snapshot(&origin);
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.get("example.test/slot").map(String::as_str), Some("a"));
    }

    #[test]
    fn replay_writes_all_entries() {
        let mut store = MemScratch::new();
        store
            .replay([("a", "1"), ("b", "2")])
            .unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert_eq!(store.get("b").as_deref(), Some("2"));
        assert_eq!(store.len(), 2);
    }
}
