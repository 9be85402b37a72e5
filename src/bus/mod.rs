//! Hierarchical cluster addressing.
//!
//! Every process in the mesh is identified by a bus address made of four
//! byte-sized fields, packed big-endian into a single `u32` bus id:
//!
//! ```text
//!  31      24 23      16 15       8 7        0
//! ┌──────────┬──────────┬──────────┬──────────┐
//! │ channel  │   zone   │ app type │ instance │
//! └──────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! The canonical string form is the four fields in decimal joined by `.`,
//! e.g. `2.3.4.5` for bus id `0x02030405`.
//!
//! # Example
//!
//! ```rust,ignore
//! use busmesh::bus::structs::bus_addr::BusAddr;
//!
//! let id = BusAddr::encode(2, 3, 4, 5);
//! assert_eq!(id, 0x02030405);
//! assert_eq!(BusAddr::format(id), "2.3.4.5");
//! assert_eq!(BusAddr::parse("2.3.4.5")?, id);
//! ```

/// Process role enumeration.
pub mod enums;

/// Bus address structure.
pub mod structs;

/// Bus address codec.
pub mod impls;

/// Bus id type alias.
pub mod types;
