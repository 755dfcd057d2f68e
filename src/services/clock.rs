use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current time as a Unix timestamp in seconds
///
/// Injected into the item store so tests can control timestamps without
/// sleeping.
pub trait Clock {
    fn now(&self) -> i64;
}

/// Production clock backed by the system time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Manually advanced clock
pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    pub fn new(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}
