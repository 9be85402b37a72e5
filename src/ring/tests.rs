#[cfg(test)]
mod ring_tests {
    use crate::common::enums::mesh_error::MeshError;
    use crate::ring::impls::consistent_hash_ring::DEFAULT_WEIGHT;
    use crate::ring::structs::consistent_hash_ring::ConsistentHashRing;
    use crate::ring::structs::machine_node::MachineNode;

    const PEER_A: u32 = 0x01010301;
    const PEER_B: u32 = 0x01010302;

    #[test]
    fn test_empty_ring_lookup_fails() {
        let ring = ConsistentHashRing::new();
        assert!(ring.is_empty());
        assert_eq!(ring.lookup(12345).unwrap_err(), MeshError::EmptyRing);
        assert_eq!(ring.lookup_by_str("player-1").unwrap_err(), MeshError::EmptyRing);
    }

    #[test]
    fn test_insert_places_weight_replicas() {
        let mut ring = ConsistentHashRing::new();
        let placed = ring.insert(MachineNode::new(PEER_A, "10.0.0.1", 9001));
        assert_eq!(placed, DEFAULT_WEIGHT as usize);
        assert_eq!(ring.len(), DEFAULT_WEIGHT as usize);
        assert_eq!(ring.machine_count(), 1);
        assert!(ring.contains(PEER_A));
    }

    #[test]
    fn test_single_node_owns_every_key() {
        let mut ring = ConsistentHashRing::new();
        ring.insert(MachineNode::new(PEER_A, "10.0.0.1", 9001));
        for key in [0u32, 1, 0x7FFF_FFFF, u32::MAX] {
            assert_eq!(ring.lookup(key).unwrap().machine_id, PEER_A);
        }
    }

    #[test]
    fn test_lookup_wraps_past_last_replica() {
        let mut ring = ConsistentHashRing::new();
        ring.insert(MachineNode::with_weight(PEER_A, "10.0.0.1", 9001, 1));
        ring.insert(MachineNode::with_weight(PEER_B, "10.0.0.2", 9001, 1));
        let hash_a = ConsistentHashRing::replica_hash(PEER_A, 0);
        let hash_b = ConsistentHashRing::replica_hash(PEER_B, 0);
        let (low, high, low_id, high_id) = if hash_a < hash_b {
            (hash_a, hash_b, PEER_A, PEER_B)
        } else {
            (hash_b, hash_a, PEER_B, PEER_A)
        };
        assert_eq!(ring.lookup(low).unwrap().machine_id, low_id);
        assert_eq!(ring.lookup(low.wrapping_add(1)).unwrap().machine_id, high_id);
        assert_eq!(ring.lookup(high).unwrap().machine_id, high_id);
        if high < u32::MAX {
            assert_eq!(ring.lookup(high + 1).unwrap().machine_id, low_id);
        }
    }

    #[test]
    fn test_erase_removes_all_replicas() {
        let mut ring = ConsistentHashRing::new();
        ring.insert(MachineNode::new(PEER_A, "10.0.0.1", 9001));
        ring.insert(MachineNode::new(PEER_B, "10.0.0.2", 9001));
        let removed = ring.erase(PEER_A);
        assert_eq!(removed, DEFAULT_WEIGHT as usize);
        assert!(!ring.contains(PEER_A));
        for i in 0..1000 {
            let owner = ring.lookup_by_str(&format!("key-{}", i)).unwrap();
            assert_eq!(owner.machine_id, PEER_B);
        }
    }

    #[test]
    fn test_erase_restores_replicas_skipped_on_collision() {
        // Weights this large make crc32 position collisions between the two
        // peers all but certain.
        const WEIGHT: u32 = 150_000;
        let mut ring = ConsistentHashRing::new();
        ring.insert(MachineNode::with_weight(PEER_A, "10.0.0.1", 9001, WEIGHT));
        let placed_b = ring.insert(MachineNode::with_weight(PEER_B, "10.0.0.2", 9001, WEIGHT));

        let mut alone = ConsistentHashRing::new();
        let placed_alone = alone.insert(MachineNode::with_weight(PEER_B, "10.0.0.2", 9001, WEIGHT));
        assert!(placed_b <= placed_alone);

        ring.erase(PEER_A);
        assert_eq!(ring.len(), alone.len(), "Every position of the remaining peer is back");
        for (hash, virtual_node) in alone.nodes.iter() {
            let restored = ring.nodes.get(hash).unwrap();
            assert_eq!(restored.node.machine_id, PEER_B);
            assert_eq!(restored.replica, virtual_node.replica);
        }
    }

    #[test]
    fn test_erase_unknown_is_noop() {
        let mut ring = ConsistentHashRing::new();
        ring.insert(MachineNode::new(PEER_A, "10.0.0.1", 9001));
        assert_eq!(ring.erase(PEER_B), 0);
        assert_eq!(ring.len(), DEFAULT_WEIGHT as usize);
    }

    #[test]
    fn test_reinsert_replaces_member() {
        let mut ring = ConsistentHashRing::new();
        ring.insert(MachineNode::new(PEER_A, "10.0.0.1", 9001));
        ring.insert(MachineNode::new(PEER_A, "10.0.0.9", 9009));
        assert_eq!(ring.machine_count(), 1);
        assert_eq!(ring.len(), DEFAULT_WEIGHT as usize);
        assert_eq!(ring.lookup(0).unwrap().ip, "10.0.0.9");
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let mut ring = ConsistentHashRing::new();
        ring.insert(MachineNode::new(PEER_A, "10.0.0.1", 9001));
        ring.insert(MachineNode::new(PEER_B, "10.0.0.2", 9001));
        for i in 0..200 {
            let key = format!("guild-{}", i);
            let first = ring.lookup_by_str(&key).unwrap().machine_id;
            let second = ring.lookup_by_str(&key).unwrap().machine_id;
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_clear() {
        let mut ring = ConsistentHashRing::new();
        ring.insert(MachineNode::new(PEER_A, "10.0.0.1", 9001));
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.machines(), Vec::<u32>::new());
    }
}
