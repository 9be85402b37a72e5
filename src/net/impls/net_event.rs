use crate::bus::types::BusId;
use crate::net::enums::net_event_type::NetEventType;
use crate::net::structs::net_event::NetEvent;
use crate::net::types::SessionId;

impl NetEvent {
    pub fn connected(bus_id: BusId, session_id: SessionId, ip: &str) -> NetEvent {
        NetEvent {
            event_type: NetEventType::Connected,
            bus_id,
            session_id,
            ip: ip.to_string(),
        }
    }

    pub fn disconnected(bus_id: BusId, session_id: SessionId, ip: &str) -> NetEvent {
        NetEvent {
            event_type: NetEventType::Disconnected,
            bus_id,
            session_id,
            ip: ip.to_string(),
        }
    }
}
