use crate::common::structs::system_clock::SystemClock;
use crate::common::traits::clock::Clock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}
