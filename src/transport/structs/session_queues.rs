use crossbeam::queue::SegQueue;
use parking_lot::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use crate::net::structs::message_envelope::MessageEnvelope;
use crate::net::structs::net_event::NetEvent;

#[derive(Debug, Default)]
pub struct SessionQueues {
    pub events: SegQueue<NetEvent>,
    pub messages: SegQueue<MessageEnvelope>,
    /// Writer channel, present only while the session is up.
    pub sender: RwLock<Option<UnboundedSender<Vec<u8>>>>,
}
