use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of last-played timestamps (milliseconds since the Unix epoch).
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually-advanced clock for tests; clones share the same instant.
#[derive(Debug, Default, Clone)]
pub struct FixedClock(Rc<Cell<u64>>);

impl FixedClock {
    pub fn new(now_millis: u64) -> Self {
        Self(Rc::new(Cell::new(now_millis)))
    }

    pub fn set(&self, now_millis: u64) {
        self.0.set(now_millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0.get()
    }
}
