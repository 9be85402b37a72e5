use crate::net::structs::message_envelope::MessageEnvelope;
use crate::net::structs::msg_head::MsgHead;
use crate::net::types::{MsgId, SessionId};

impl MessageEnvelope {
    pub fn new(msg_id: MsgId, payload: Vec<u8>, session_id: SessionId) -> MessageEnvelope {
        MessageEnvelope {
            msg_id,
            actor_id: 0,
            payload,
            session_id,
        }
    }

    pub fn from_frame(head: MsgHead, payload: Vec<u8>, session_id: SessionId) -> MessageEnvelope {
        MessageEnvelope {
            msg_id: head.msg_id,
            actor_id: head.actor_id,
            payload,
            session_id,
        }
    }
}
