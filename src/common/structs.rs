//! Common data structures.

/// Plain message error used while booting the binary.
pub mod custom_error;

/// Wall-clock time source.
pub mod system_clock;

/// Manually driven time source for deterministic ticking.
pub mod manual_clock;
