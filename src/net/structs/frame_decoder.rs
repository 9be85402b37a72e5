use bytes::BytesMut;
use crate::net::enums::head_length::HeadLength;

/// Accumulates raw bytes from a stream and yields complete frames.
#[derive(Debug)]
pub struct FrameDecoder {
    pub head_length: HeadLength,
    pub buffer: BytesMut,
    pub max_body_len: usize,
}
