/// Point-in-time copy of the counters.
pub mod client_stats;

/// Atomic counters.
pub mod client_stats_atomics;
