use std::collections::btree_map::Entry;
use std::sync::Arc;
use ahash::AHashSet;
use log::{debug, warn};
use crate::bus::structs::bus_addr::BusAddr;
use crate::bus::types::BusId;
use crate::common::enums::mesh_error::MeshError;
use crate::ring::structs::consistent_hash_ring::ConsistentHashRing;
use crate::ring::structs::machine_node::MachineNode;
use crate::ring::structs::virtual_node::VirtualNode;

pub const DEFAULT_WEIGHT: u32 = 100;

impl ConsistentHashRing {
    pub fn new() -> ConsistentHashRing {
        ConsistentHashRing::default()
    }

    /// Position of one replica of a peer on the ring.
    pub fn replica_hash(machine_id: BusId, replica: u32) -> u32 {
        crc32fast::hash(format!("{}#{}", BusAddr::format(machine_id), replica).as_bytes())
    }

    pub fn key_hash(key: &str) -> u32 {
        crc32fast::hash(key.as_bytes())
    }

    /// Places `node.weight` replicas of the peer on the ring.
    ///
    /// A peer that is already a member is replaced as a whole. A replica
    /// whose position is held by another peer is skipped and the earlier
    /// owner keeps the slot until it is erased. Returns the number of
    /// replicas placed.
    pub fn insert(&mut self, node: MachineNode) -> usize {
        if self.members.contains_key(&node.machine_id) {
            self.erase(node.machine_id);
        }

        let node = Arc::new(node);
        let mut placed = 0;
        for replica in 0..node.weight {
            match self.nodes.entry(Self::replica_hash(node.machine_id, replica)) {
                Entry::Vacant(slot) => {
                    slot.insert(VirtualNode { replica, node: node.clone() });
                    placed += 1;
                }
                Entry::Occupied(slot) => {
                    debug!(
                        "[RING] Replica {} of {} collides with replica {} of {}",
                        replica,
                        BusAddr::format(node.machine_id),
                        slot.get().replica,
                        BusAddr::format(slot.get().node.machine_id)
                    );
                }
            }
        }
        if placed == 0 {
            warn!("[RING] No replica of {} could be placed", BusAddr::format(node.machine_id));
        }
        self.members.insert(node.machine_id, node);
        placed
    }

    /// Removes every replica of the peer. Unknown peers are a no-op.
    ///
    /// Positions the peer held are handed to any remaining peer whose
    /// replica was skipped there on insert, lowest bus id first.
    pub fn erase(&mut self, machine_id: BusId) -> usize {
        let Some(node) = self.members.remove(&machine_id) else {
            return 0;
        };
        let mut vacated = AHashSet::new();
        for replica in 0..node.weight {
            let hash = Self::replica_hash(machine_id, replica);
            if let Entry::Occupied(slot) = self.nodes.entry(hash)
                && slot.get().node.machine_id == machine_id
            {
                slot.remove();
                vacated.insert(hash);
            }
        }
        let removed = vacated.len();
        if !vacated.is_empty() {
            self.refill(&vacated);
        }
        removed
    }

    fn refill(&mut self, vacated: &AHashSet<u32>) {
        for member_id in self.machines() {
            let Some(member) = self.members.get(&member_id).cloned() else {
                continue;
            };
            for replica in 0..member.weight {
                let hash = Self::replica_hash(member_id, replica);
                if !vacated.contains(&hash) {
                    continue;
                }
                if let Entry::Vacant(slot) = self.nodes.entry(hash) {
                    debug!("[RING] Replica {} of {} takes over a freed position", replica, BusAddr::format(member_id));
                    slot.insert(VirtualNode { replica, node: member.clone() });
                }
            }
        }
    }

    /// Owner of the first virtual node at or after `key_hash`, wrapping to
    /// the start of the ring.
    pub fn lookup(&self, key_hash: u32) -> Result<&MachineNode, MeshError> {
        self.nodes
            .range(key_hash..)
            .next()
            .or_else(|| self.nodes.iter().next())
            .map(|(_, virtual_node)| virtual_node.node.as_ref())
            .ok_or(MeshError::EmptyRing)
    }

    pub fn lookup_by_str(&self, key: &str) -> Result<&MachineNode, MeshError> {
        self.lookup(Self::key_hash(key))
    }

    pub fn contains(&self, machine_id: BusId) -> bool {
        self.members.contains_key(&machine_id)
    }

    pub fn machine(&self, machine_id: BusId) -> Option<&MachineNode> {
        self.members.get(&machine_id).map(|node| node.as_ref())
    }

    pub fn machines(&self) -> Vec<BusId> {
        let mut ids: Vec<BusId> = self.members.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn machine_count(&self) -> usize {
        self.members.len()
    }

    /// Number of virtual nodes on the ring.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.members.clear();
    }
}
