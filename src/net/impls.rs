pub mod endpoint;
pub mod frame_decoder;
pub mod head_length;
pub mod message_envelope;
pub mod msg_head;
pub mod net_event;
pub mod protocol;
