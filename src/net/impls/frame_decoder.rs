use bytes::BytesMut;
use crate::common::enums::mesh_error::MeshError;
use crate::net::enums::head_length::HeadLength;
use crate::net::structs::frame_decoder::FrameDecoder;
use crate::net::structs::msg_head::MsgHead;

pub const MAX_BODY_LEN: usize = 16 * 1024 * 1024;

impl FrameDecoder {
    pub fn new(head_length: HeadLength) -> FrameDecoder {
        FrameDecoder {
            head_length,
            buffer: BytesMut::with_capacity(4096),
            max_body_len: MAX_BODY_LEN,
        }
    }

    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Next complete frame, `None` while more bytes are needed.
    ///
    /// A header announcing a body above `max_body_len` is an error; the
    /// stream cannot be resynchronised after it.
    pub fn next_frame(&mut self) -> Result<Option<(MsgHead, Vec<u8>)>, MeshError> {
        let head_size = self.head_length.size();
        if self.buffer.len() < head_size {
            return Ok(None);
        }
        let head = MsgHead::decode(self.head_length, &self.buffer[..head_size])?;
        let body_len = head.body_len as usize;
        if body_len > self.max_body_len {
            return Err(MeshError::Frame(format!(
                "body of {} bytes exceeds limit of {}",
                body_len, self.max_body_len
            )));
        }
        let frame_len = head_size + body_len;
        if self.buffer.len() < frame_len {
            return Ok(None);
        }
        let frame = self.buffer.split_to(frame_len);
        Ok(Some((head, frame[head_size..].to_vec())))
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}
