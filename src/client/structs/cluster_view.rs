use ahash::AHashMap;
use crate::bus::types::BusId;
use crate::client::structs::peer_link::PeerLink;
use crate::ring::structs::consistent_hash_ring::ConsistentHashRing;

#[derive(Debug, Clone, Copy)]
pub struct ClusterView<'a> {
    pub ring: &'a ConsistentHashRing,
    pub links: &'a AHashMap<BusId, PeerLink>,
}
