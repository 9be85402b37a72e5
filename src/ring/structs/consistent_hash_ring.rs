use std::collections::BTreeMap;
use std::sync::Arc;
use ahash::AHashMap;
use crate::bus::types::BusId;
use crate::ring::structs::machine_node::MachineNode;
use crate::ring::structs::virtual_node::VirtualNode;

/// Sorted mapping from virtual node hash to the peer owning it.
///
/// `members` tracks every physical peer currently on the ring so that its
/// replicas can be recomputed and removed as one unit.
#[derive(Debug, Default)]
pub struct ConsistentHashRing {
    pub nodes: BTreeMap<u32, VirtualNode>,
    pub members: AHashMap<BusId, Arc<MachineNode>>,
}
