pub mod client_service;
pub mod cluster_view;
pub mod connection_entry;
pub mod connection_registry;
pub mod connection_state;
pub mod dispatcher;
pub mod peer_link;
