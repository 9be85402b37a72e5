//! Connection and dispatch statistics.
//!
//! Counters are atomic so that a snapshot can be taken from any thread
//! (for example the console logger) while the tick thread keeps updating them.

/// Statistics event enumeration.
pub mod enums;

/// Counter storage and snapshot structures.
pub mod structs;

/// Counter updates and snapshots.
pub mod impls;
