use crate::bus::types::BusId;
use crate::client::enums::connection_state::ConnectionState;
use crate::net::enums::head_length::HeadLength;
use crate::net::structs::endpoint::Endpoint;
use crate::net::traits::transport::Transport;
use crate::net::types::SessionId;

/// The entry exclusively owns its transport; dropping the entry shuts the
/// transport down first.
pub struct ConnectionEntry<T: Transport> {
    pub target: BusId,
    pub endpoint: Endpoint,
    pub head_length: HeadLength,
    pub state: ConnectionState,
    /// Last connect attempt, or last server report while connected.
    pub last_active_ms: u64,
    pub session_id: Option<SessionId>,
    pub transport: Option<T>,
}
