//! Common utilities and shared functionality.
//!
//! This module contains the error types and the time source used across
//! every other module of the crate.
//!
//! # Data Structures
//!
//! - `MeshError` - Library-wide error enumeration
//! - `CustomError` - Plain message error used by the binary during boot
//! - `SystemClock` / `ManualClock` - Millisecond time sources
//!
//! # Example
//!
//! ```rust,ignore
//! use busmesh::common::structs::manual_clock::ManualClock;
//! use busmesh::common::traits::clock::Clock;
//!
//! let clock = ManualClock::new(1_000);
//! clock.advance_secs(30);
//! assert_eq!(clock.now_ms(), 31_000);
//! ```

/// Error enumerations.
pub mod enums;

/// Common data structures (errors, clocks).
pub mod structs;

/// Implementation blocks for common types.
pub mod impls;

/// Time source abstraction.
pub mod traits;
