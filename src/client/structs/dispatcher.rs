use ahash::AHashMap;
use crate::client::types::{EventHandler, MessageHandler};
use crate::net::types::MsgId;

#[derive(Default)]
pub struct Dispatcher {
    pub handlers: AHashMap<MsgId, MessageHandler>,
    pub forward_handlers: Vec<MessageHandler>,
    pub event_handlers: Vec<EventHandler>,
}
