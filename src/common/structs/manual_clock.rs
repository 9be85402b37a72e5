use std::sync::atomic::AtomicU64;

/// Clock whose time only moves when told to.
///
/// Shared between a test and the service through an `Arc`, so the test can
/// advance time between ticks.
#[derive(Debug, Default)]
pub struct ManualClock {
    pub now: AtomicU64,
}
