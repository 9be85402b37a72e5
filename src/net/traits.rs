/// Per-protocol connection capability.
pub mod transport;

/// Creates transports for a protocol tag.
pub mod transport_factory;
