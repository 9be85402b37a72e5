use proptest::prelude::*;
use busmesh::bus::structs::bus_addr::BusAddr;
use busmesh::ring::structs::consistent_hash_ring::ConsistentHashRing;
use busmesh::ring::structs::machine_node::MachineNode;

const SAMPLE_KEYS: usize = 10_000;

fn node(bus: &str, port: u16) -> MachineNode {
    MachineNode::with_weight(BusAddr::parse(bus).unwrap(), "10.0.0.1", port, 100)
}

fn owners(ring: &ConsistentHashRing) -> Vec<u32> {
    (0..SAMPLE_KEYS)
        .map(|index| ring.lookup_by_str(&format!("key-{index}")).unwrap().machine_id)
        .collect()
}

#[test]
fn test_adding_node_keeps_most_keys_in_place() {
    let mut ring = ConsistentHashRing::new();
    ring.insert(node("1.1.3.1", 9001));
    ring.insert(node("1.1.3.2", 9002));
    let before = owners(&ring);

    let added = node("1.1.3.3", 9003);
    let added_id = added.machine_id;
    ring.insert(added);
    let after = owners(&ring);

    let unchanged = before.iter().zip(after.iter()).filter(|(a, b)| a == b).count();
    let moved_to_new = before
        .iter()
        .zip(after.iter())
        .filter(|(a, b)| a != b)
        .all(|(_, b)| *b == added_id);

    assert!(unchanged * 2 > SAMPLE_KEYS, "Only {unchanged} of {SAMPLE_KEYS} keys kept their node");
    assert!(moved_to_new, "Keys may only move to the added node");
    let moved = SAMPLE_KEYS - unchanged;
    assert!(moved > SAMPLE_KEYS / 10, "Added node should take a real share, took {moved}");
}

#[test]
fn test_removing_node_only_moves_its_keys() {
    let mut ring = ConsistentHashRing::new();
    for (index, bus) in ["1.1.3.1", "1.1.3.2", "1.1.3.3"].iter().enumerate() {
        ring.insert(node(bus, 9001 + index as u16));
    }
    let before = owners(&ring);
    let removed = BusAddr::parse("1.1.3.2").unwrap();
    ring.erase(removed);
    let after = owners(&ring);

    for (a, b) in before.iter().zip(after.iter()) {
        if *a != removed {
            assert_eq!(a, b, "Keys of remaining nodes must not move");
        }
        assert_ne!(*b, removed);
    }
}

#[test]
fn test_erase_then_lookup_never_returns_node() {
    let mut ring = ConsistentHashRing::new();
    let a = node("2.3.4.5", 9001);
    let a_id = a.machine_id;
    ring.insert(a);
    ring.insert(node("2.3.4.6", 9002));
    assert!(owners(&ring).contains(&a_id));

    assert_eq!(ring.erase(a_id), 100);
    assert!(!owners(&ring).contains(&a_id));
    assert_eq!(ring.erase(a_id), 0, "Second erase is a no-op");
}

proptest! {
    #[test]
    fn test_lookup_is_deterministic(key_hash: u32, peers in 1usize..6) {
        let mut ring = ConsistentHashRing::new();
        for index in 0..peers {
            ring.insert(MachineNode::new(BusAddr::encode(1, 1, 3, index as u8), "10.0.0.1", 9000 + index as u16));
        }
        let first = ring.lookup(key_hash).unwrap().machine_id;
        prop_assert_eq!(ring.lookup(key_hash).unwrap().machine_id, first);

        let mut rebuilt = ConsistentHashRing::new();
        for index in (0..peers).rev() {
            rebuilt.insert(MachineNode::new(BusAddr::encode(1, 1, 3, index as u8), "10.0.0.1", 9000 + index as u16));
        }
        prop_assert_eq!(rebuilt.lookup(key_hash).unwrap().machine_id, first);
    }
}
