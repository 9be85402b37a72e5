use ahash::AHashMap;
use crate::bus::types::BusId;
use crate::client::structs::cluster_view::ClusterView;
use crate::client::structs::peer_link::PeerLink;
use crate::common::enums::mesh_error::MeshError;
use crate::net::types::SessionId;
use crate::ring::structs::consistent_hash_ring::ConsistentHashRing;
use crate::ring::structs::machine_node::MachineNode;

impl<'a> ClusterView<'a> {
    pub fn new(ring: &'a ConsistentHashRing, links: &'a AHashMap<BusId, PeerLink>) -> ClusterView<'a> {
        ClusterView { ring, links }
    }

    pub fn route_by_key(&self, key: &str) -> Result<&'a MachineNode, MeshError> {
        self.ring.lookup_by_str(key)
    }

    pub fn is_connected(&self, bus_id: BusId) -> bool {
        self.links.contains_key(&bus_id)
    }

    pub fn session_of(&self, bus_id: BusId) -> Option<SessionId> {
        self.links.get(&bus_id).map(|link| link.session_id)
    }

    pub fn connected_peers(&self) -> Vec<BusId> {
        let mut peers: Vec<BusId> = self.links.keys().copied().collect();
        peers.sort_unstable();
        peers
    }
}
