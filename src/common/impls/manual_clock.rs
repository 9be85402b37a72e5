use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use crate::common::structs::manual_clock::ManualClock;
use crate::common::traits::clock::Clock;

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: AtomicU64::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration) {
        self.now.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new(500);
        assert_eq!(clock.now_ms(), 500);
        clock.advance_secs(2);
        assert_eq!(clock.now_ms(), 2_500);
        clock.advance(Duration::from_millis(7));
        assert_eq!(clock.now_ms(), 2_507);
    }

    #[test]
    fn test_manual_clock_set() {
        let clock = ManualClock::default();
        assert_eq!(clock.now_ms(), 0);
        clock.set(42);
        assert_eq!(clock.now_ms(), 42);
    }
}
