use crate::bus::types::BusId;
use crate::ring::impls::consistent_hash_ring::DEFAULT_WEIGHT;
use crate::ring::structs::machine_node::MachineNode;

impl MachineNode {
    pub fn new(machine_id: BusId, ip: &str, port: u16) -> MachineNode {
        MachineNode::with_weight(machine_id, ip, port, DEFAULT_WEIGHT)
    }

    pub fn with_weight(machine_id: BusId, ip: &str, port: u16, weight: u32) -> MachineNode {
        MachineNode {
            machine_id,
            ip: ip.to_string(),
            port,
            weight,
        }
    }
}
