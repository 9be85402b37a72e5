use std::collections::BTreeMap;
use ahash::AHashMap;
use crate::bus::types::BusId;
use crate::client::structs::connection_entry::ConnectionEntry;
use crate::client::structs::peer_link::PeerLink;
use crate::client::structs::pending_connection::PendingConnection;
use crate::net::traits::transport::Transport;

pub struct ConnectionRegistry<T: Transport> {
    pub pending: Vec<PendingConnection>,
    pub entries: BTreeMap<BusId, ConnectionEntry<T>>,
    /// Connected peers by bus id.
    pub links: AHashMap<BusId, PeerLink>,
}
