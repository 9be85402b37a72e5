use serde::{Deserialize, Serialize};
use crate::protocol::enums::report_encoding::ReportEncoding;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Dotted bus address of this process.
    pub self_bus_id: String,
    /// Endpoint advertised to peers in the server report.
    pub public_url: String,
    pub max_connection: u32,
    #[serde(default)]
    pub report_encoding: ReportEncoding,
    /// Seconds between reconnect attempts.
    #[serde(default = "ClientConfig::default_reconnect_interval")]
    pub reconnect_interval: u64,
    /// Seconds between server reports on a live connection.
    #[serde(default = "ClientConfig::default_keepalive_interval")]
    pub keepalive_interval: u64,
    #[serde(default = "ClientConfig::default_max_messages_per_tick")]
    pub max_messages_per_tick: usize,
    #[serde(default = "ClientConfig::default_ring_weight")]
    pub ring_weight: u32,
    #[serde(default = "ClientConfig::default_tick_interval_ms")]
    pub tick_interval_ms: u64
}
