use std::collections::BTreeMap;

use crate::{Result, ScratchStore};

/// In-memory scratch store.
///
/// Stands in for the browser's `localStorage` in native and test contexts.
/// Never fails; an optional capacity cap lets tests exercise quota handling.
#[derive(Debug, Default, Clone)]
pub struct MemScratch {
    entries: BTreeMap<String, String>,
    capacity: Option<usize>,
}

impl MemScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that refuses inserts beyond `capacity` distinct keys with
    /// [`ScratchError::QuotaExceeded`](crate::ScratchError::QuotaExceeded).
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            capacity: Some(capacity),
        }
    }
}

impl ScratchStore for MemScratch {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(capacity) = self.capacity {
            if !self.entries.contains_key(key) && self.entries.len() >= capacity {
                return Err(crate::ScratchError::QuotaExceeded);
            }
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScratchError;

    #[test]
    fn set_get_remove_clear() {
        let mut store = MemScratch::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v2"));

        store.remove("k");
        assert!(store.get("k").is_none());

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn capacity_limit_rejects_new_keys_but_allows_overwrites() {
        let mut store = MemScratch::with_capacity_limit(1);
        store.set("k", "v").unwrap();
        assert!(matches!(
            store.set("other", "v"),
            Err(ScratchError::QuotaExceeded)
        ));
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v2"));
    }
}
