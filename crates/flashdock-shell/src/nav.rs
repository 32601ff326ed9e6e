/// Seam over the browser's navigation hash and viewport.
///
/// The hash is the sole cross-reload signal of "which game is open", not a
/// router: its only legal values are `""` and `"#" + current`. `hash` and
/// `set_hash` both use that normalized form.
pub trait Navigator {
    fn hash(&self) -> String;

    /// Set the hash; `""` clears it.
    fn set_hash(&mut self, hash: &str);

    /// Scroll the library view back to the top (fired when a game closes).
    fn scroll_to_top(&mut self);
}

/// In-memory navigator for native hosts and tests.
///
/// Unlike a real browser it fires no events on assignment; the shell runs
/// every transition inline, so none are needed.
#[derive(Debug, Default)]
pub struct MemNav {
    hash: String,
    scrolls: usize,
}

impl MemNav {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-set hash, as left behind by a previous session's URL.
    pub fn with_hash(hash: &str) -> Self {
        Self {
            hash: hash.to_owned(),
            scrolls: 0,
        }
    }

    /// How many times the view was scrolled back to the top.
    pub fn scrolls(&self) -> usize {
        self.scrolls
    }
}

impl Navigator for MemNav {
    fn hash(&self) -> String {
        self.hash.clone()
    }

    fn set_hash(&mut self, hash: &str) {
        self.hash = hash.to_owned();
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}
