use crate::bus::types::BusId;
use crate::net::enums::net_event_type::NetEventType;
use crate::net::types::SessionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetEvent {
    pub event_type: NetEventType,
    pub bus_id: BusId,
    pub session_id: SessionId,
    pub ip: String,
}
