use crate::bus::types::BusId;
use crate::client::structs::peer_link::PeerLink;
use crate::net::types::SessionId;

impl PeerLink {
    pub fn new(bus_id: BusId, session_id: SessionId, ip: &str, port: u16) -> PeerLink {
        PeerLink {
            bus_id,
            session_id,
            ip: ip.to_string(),
            port,
        }
    }
}
