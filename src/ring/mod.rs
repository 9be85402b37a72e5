//! Consistent-hash routing ring.
//!
//! Maps 32-bit key hashes onto connected peers. Each physical peer is
//! represented by `weight` virtual nodes spread over the hash space, so a
//! membership change only remaps the keys owned by the replicas that were
//! added or removed.
//!
//! # Lookup
//!
//! A key hash is served by the first virtual node whose hash is greater than
//! or equal to it, wrapping around to the smallest hash on the ring. String
//! keys are hashed with CRC32 before the lookup.
//!
//! # Example
//!
//! ```rust,ignore
//! use busmesh::ring::structs::consistent_hash_ring::ConsistentHashRing;
//! use busmesh::ring::structs::machine_node::MachineNode;
//!
//! let mut ring = ConsistentHashRing::new();
//! ring.insert(MachineNode::new(0x02030405, "1.2.3.4", 9001));
//! let owner = ring.lookup_by_str("guild-42")?;
//! assert_eq!(owner.machine_id, 0x02030405);
//! ```

/// Ring data structures.
pub mod structs;

/// Ring operations.
pub mod impls;

/// Unit tests for the ring.
pub mod tests;
