use serde::{Deserialize, Serialize};
use crate::bus::types::BusId;
use crate::protocol::enums::logic_status::LogicStatus;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerReport {
    pub bus_id: BusId,
    pub cur_online: u32,
    pub url: String,
    pub max_online: u32,
    pub logic_status: LogicStatus,
}
