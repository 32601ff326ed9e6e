use crate::{Result, ScratchStore};

/// Namespacing adapter over another scratch store.
///
/// The browser scratch store is a single flat namespace shared by every game,
/// which is why the shell wipes it on launch. Hosts that want per-game
/// isolation instead can hand the player a `ScopedScratch`: every key is
/// stored as `{scope}\u{1f}{key}` in the underlying store, and `clear` only
/// touches the scope's own entries.
#[derive(Debug)]
pub struct ScopedScratch<S> {
    inner: S,
    prefix: String,
}

// Unit separator; cannot collide with emulator-written keys, which are
// origin-prefixed printable strings.
const SCOPE_SEP: char = '\u{1f}';

impl<S: ScratchStore> ScopedScratch<S> {
    pub fn new(inner: S, scope: &str) -> Self {
        Self {
            inner,
            prefix: format!("{scope}{SCOPE_SEP}"),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

impl<S: ScratchStore> ScratchStore for ScopedScratch<S> {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(&self.scoped(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let key = self.scoped(key);
        self.inner.set(&key, value)
    }

    fn remove(&mut self, key: &str) {
        let key = self.scoped(key);
        self.inner.remove(&key);
    }

    fn clear(&mut self) {
        for key in self.keys() {
            let key = self.scoped(&key);
            self.inner.remove(&key);
        }
    }

    fn keys(&self) -> Vec<String> {
        self.inner
            .keys()
            .into_iter()
            .filter_map(|key| key.strip_prefix(&self.prefix).map(str::to_owned))
            .collect()
    }
}
