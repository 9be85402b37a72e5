pub mod net_transport;
pub mod net_transport_factory;
pub mod session_queues;
pub mod tcp_client;
pub mod web_socket_client;
