/// Protocol + address of a peer.
pub mod endpoint;

/// Streaming splitter of wire frames.
pub mod frame_decoder;

/// Decoded inbound message.
pub mod message_envelope;

/// Wire header.
pub mod msg_head;

/// Connection event.
pub mod net_event;
