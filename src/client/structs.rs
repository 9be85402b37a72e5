/// Orchestrator driving every peer connection.
pub mod client_service;

/// Read-only view of the ring and live peers handed to event callbacks.
pub mod cluster_view;

/// One desired peer connection and its owned transport.
pub mod connection_entry;

/// Owner of all connection entries.
pub mod connection_registry;

/// Message id and event handler tables.
pub mod dispatcher;

/// A live session to a connected peer.
pub mod peer_link;

/// A connection request waiting for the next tick.
pub mod pending_connection;
