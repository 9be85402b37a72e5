use crate::net::types::{MsgId, SessionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEnvelope {
    pub msg_id: MsgId,
    /// Actor id from the `ss` header, zero on `cs` connections.
    pub actor_id: u64,
    pub payload: Vec<u8>,
    pub session_id: SessionId,
}
