use crate::net::types::MsgId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsgHead {
    pub msg_id: MsgId,
    pub body_len: u32,
    pub actor_id: u64,
}
