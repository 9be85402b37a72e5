use std::sync::atomic::{AtomicI64, Ordering};
use log::error;
use crate::common::enums::mesh_error::MeshError;
use crate::net::structs::frame_decoder::FrameDecoder;
use crate::net::structs::message_envelope::MessageEnvelope;
use crate::net::types::SessionId;
use crate::transport::structs::session_queues::SessionQueues;

static NEXT_SESSION_ID: AtomicI64 = AtomicI64::new(1);

impl SessionQueues {
    pub fn new() -> SessionQueues {
        SessionQueues::default()
    }

    /// Process-wide unique id for a new session.
    pub fn next_session_id() -> SessionId {
        NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed)
    }

    /// Moves every complete frame out of `decoder` onto the message queue.
    pub fn push_frames(&self, decoder: &mut FrameDecoder, session_id: SessionId, tag: &str) -> Result<usize, MeshError> {
        let mut pushed = 0;
        loop {
            match decoder.next_frame() {
                Ok(Some((head, body))) => {
                    self.messages.push(MessageEnvelope::from_frame(head, body, session_id));
                    pushed += 1;
                }
                Ok(None) => return Ok(pushed),
                Err(e) => {
                    error!("[{}] Session {} sent a bad frame: {}", tag, session_id, e);
                    return Err(e);
                }
            }
        }
    }

    /// `false` when the session is not up or its writer already stopped.
    pub fn send(&self, data: &[u8]) -> bool {
        match self.sender.read().as_ref() {
            Some(sender) => sender.send(data.to_vec()).is_ok(),
            None => false,
        }
    }

    /// Drops the writer channel and everything not yet polled.
    pub fn close(&self) {
        *self.sender.write() = None;
        while self.events.pop().is_some() {}
        while self.messages.pop().is_some() {}
    }
}
