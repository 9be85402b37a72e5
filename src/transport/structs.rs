/// Builds the transport matching an endpoint's protocol.
pub mod net_transport_factory;

/// Queues shared between a session's tokio tasks and the tick thread.
pub mod session_queues;

/// Raw TCP session.
pub mod tcp_client;

/// WebSocket session.
pub mod web_socket_client;
