use byteorder::{BigEndian, ByteOrder};
use crate::common::enums::mesh_error::MeshError;
use crate::net::enums::head_length::HeadLength;
use crate::net::structs::msg_head::MsgHead;
use crate::net::types::MsgId;

impl MsgHead {
    pub fn new(msg_id: MsgId, body_len: u32, actor_id: u64) -> MsgHead {
        MsgHead { msg_id, body_len, actor_id }
    }

    /// Writes the header in `head_length` layout. The actor id is dropped
    /// on `cs` connections.
    pub fn encode(&self, head_length: HeadLength) -> Vec<u8> {
        let mut buffer = vec![0u8; head_length.size()];
        BigEndian::write_u16(&mut buffer[0..2], self.msg_id);
        BigEndian::write_u32(&mut buffer[2..6], self.body_len);
        if head_length == HeadLength::ss {
            BigEndian::write_u64(&mut buffer[6..14], self.actor_id);
        }
        buffer
    }

    pub fn decode(head_length: HeadLength, data: &[u8]) -> Result<MsgHead, MeshError> {
        if data.len() < head_length.size() {
            return Err(MeshError::Frame(format!(
                "header needs {} bytes, got {}",
                head_length.size(),
                data.len()
            )));
        }
        let actor_id = match head_length {
            HeadLength::cs => 0,
            HeadLength::ss => BigEndian::read_u64(&data[6..14]),
        };
        Ok(MsgHead {
            msg_id: BigEndian::read_u16(&data[0..2]),
            body_len: BigEndian::read_u32(&data[2..6]),
            actor_id,
        })
    }

    /// Header followed by body, ready for a transport's `send`.
    pub fn encode_frame(head_length: HeadLength, msg_id: MsgId, actor_id: u64, body: &[u8]) -> Vec<u8> {
        let head = MsgHead::new(msg_id, body.len() as u32, actor_id);
        let mut frame = head.encode(head_length);
        frame.extend_from_slice(body);
        frame
    }
}
