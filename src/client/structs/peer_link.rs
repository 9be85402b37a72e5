use serde::{Deserialize, Serialize};
use crate::bus::types::BusId;
use crate::net::types::SessionId;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PeerLink {
    pub bus_id: BusId,
    pub session_id: SessionId,
    pub ip: String,
    pub port: u16,
}
