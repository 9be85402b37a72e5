pub mod net_transport;
