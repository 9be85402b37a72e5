/// The sorted ring of virtual nodes.
pub mod consistent_hash_ring;

/// Physical peer description.
pub mod machine_node;

/// One replica position of a physical peer.
pub mod virtual_node;
