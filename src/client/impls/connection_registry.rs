use std::collections::BTreeMap;
use ahash::AHashMap;
use log::debug;
use crate::bus::structs::bus_addr::BusAddr;
use crate::bus::types::BusId;
use crate::client::structs::connection_entry::ConnectionEntry;
use crate::client::structs::connection_registry::ConnectionRegistry;
use crate::client::structs::peer_link::PeerLink;
use crate::client::structs::pending_connection::PendingConnection;
use crate::net::enums::head_length::HeadLength;
use crate::net::structs::endpoint::Endpoint;
use crate::net::traits::transport::Transport;

impl<T: Transport> ConnectionRegistry<T> {
    pub fn new() -> ConnectionRegistry<T> {
        ConnectionRegistry {
            pending: Vec::new(),
            entries: BTreeMap::new(),
            links: AHashMap::new(),
        }
    }

    /// Queues a connection to `target`. Returns `false` without touching
    /// anything when the target is already pending or active.
    pub fn request_connection(&mut self, target: BusId, endpoint: Endpoint, head_length: HeadLength) -> bool {
        if self.contains(target) {
            debug!("[CLIENT] Connection to {} already requested", BusAddr::format(target));
            return false;
        }
        self.pending.push(PendingConnection { target, endpoint, head_length });
        true
    }

    /// Moves queued requests into the active map and returns the ids that
    /// were added, in request order.
    pub fn promote_pending(&mut self, now_ms: u64) -> Vec<BusId> {
        let mut promoted = Vec::with_capacity(self.pending.len());
        for request in self.pending.drain(..) {
            if self.entries.contains_key(&request.target) {
                continue;
            }
            self.entries.insert(
                request.target,
                ConnectionEntry::new(request.target, request.endpoint, request.head_length, now_ms),
            );
            promoted.push(request.target);
        }
        promoted
    }

    pub fn get(&self, target: BusId) -> Option<&ConnectionEntry<T>> {
        self.entries.get(&target)
    }

    pub fn get_mut(&mut self, target: BusId) -> Option<&mut ConnectionEntry<T>> {
        self.entries.get_mut(&target)
    }

    pub fn contains(&self, target: BusId) -> bool {
        self.entries.contains_key(&target) || self.pending.iter().any(|request| request.target == target)
    }

    pub fn link(&self, target: BusId) -> Option<&PeerLink> {
        self.links.get(&target)
    }

    /// Forgets `target`, pending or active. The entry's transport is shut
    /// down before the entry is returned.
    pub fn remove(&mut self, target: BusId) -> Option<ConnectionEntry<T>> {
        self.pending.retain(|request| request.target != target);
        self.links.remove(&target);
        let mut entry = self.entries.remove(&target)?;
        entry.shutdown_transport();
        Some(entry)
    }

    pub fn shutdown_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.shutdown_transport();
        }
        self.entries.clear();
        self.pending.clear();
        self.links.clear();
    }

    /// Active entries; pending requests are not counted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl<T: Transport> Default for ConnectionRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
