/// Self-description sent to peers on connect and on every keepalive.
pub mod server_report;
