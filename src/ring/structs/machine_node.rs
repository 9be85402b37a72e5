use serde::{Deserialize, Serialize};
use crate::bus::types::BusId;

/// A physical peer that owns part of the ring.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MachineNode {
    pub machine_id: BusId,
    pub ip: String,
    pub port: u16,
    /// Number of virtual nodes placed on the ring for this peer.
    pub weight: u32,
}
