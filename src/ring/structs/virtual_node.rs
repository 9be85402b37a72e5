use std::sync::Arc;
use crate::ring::structs::machine_node::MachineNode;

#[derive(Debug, Clone)]
pub struct VirtualNode {
    pub replica: u32,
    pub node: Arc<MachineNode>,
}
