pub mod consistent_hash_ring;
pub mod machine_node;
