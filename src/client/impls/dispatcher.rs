use std::collections::hash_map::Entry;
use crate::client::structs::cluster_view::ClusterView;
use crate::client::structs::dispatcher::Dispatcher;
use crate::client::types::{EventHandler, MessageHandler};
use crate::common::enums::mesh_error::MeshError;
use crate::net::structs::message_envelope::MessageEnvelope;
use crate::net::structs::net_event::NetEvent;
use crate::net::types::MsgId;

impl Dispatcher {
    pub fn new() -> Dispatcher {
        Dispatcher::default()
    }

    /// At most one handler per message id; a second registration fails and
    /// the first handler stays in place.
    pub fn register_handler(&mut self, msg_id: MsgId, handler: MessageHandler) -> Result<(), MeshError> {
        match self.handlers.entry(msg_id) {
            Entry::Occupied(_) => Err(MeshError::DuplicateHandler(msg_id)),
            Entry::Vacant(slot) => {
                slot.insert(handler);
                Ok(())
            }
        }
    }

    pub fn register_forward_handler(&mut self, handler: MessageHandler) {
        self.forward_handlers.push(handler);
    }

    pub fn register_event_handler(&mut self, handler: EventHandler) {
        self.event_handlers.push(handler);
    }

    pub fn has_handler(&self, msg_id: MsgId) -> bool {
        self.handlers.contains_key(&msg_id)
    }

    /// Runs the handler registered for the message id, then every forward
    /// handler. Forward handlers also see messages without a handler, which
    /// are reported as `UnroutableMessage`.
    pub fn dispatch(&mut self, message: &MessageEnvelope) -> Result<(), MeshError> {
        let routed = match self.handlers.get_mut(&message.msg_id) {
            Some(handler) => {
                handler(message);
                true
            }
            None => false,
        };
        for handler in self.forward_handlers.iter_mut() {
            handler(message);
        }
        if routed {
            Ok(())
        } else {
            Err(MeshError::UnroutableMessage(message.msg_id))
        }
    }

    /// Calls event handlers in registration order.
    pub fn fire_event(&mut self, event: &NetEvent, view: &ClusterView<'_>) {
        for handler in self.event_handlers.iter_mut() {
            handler(event, view);
        }
    }
}
