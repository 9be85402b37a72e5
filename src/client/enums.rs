pub mod connection_state;
