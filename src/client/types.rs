use crate::client::structs::cluster_view::ClusterView;
use crate::net::structs::message_envelope::MessageEnvelope;
use crate::net::structs::net_event::NetEvent;

pub type MessageHandler = Box<dyn FnMut(&MessageEnvelope) + Send>;

/// Receives a connection event after the ring and peer index were updated.
pub type EventHandler = Box<dyn FnMut(&NetEvent, &ClusterView<'_>) + Send>;
