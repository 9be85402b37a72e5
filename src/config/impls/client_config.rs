use crate::config::structs::client_config::ClientConfig;
use crate::protocol::enums::report_encoding::ReportEncoding;
use crate::ring::impls::consistent_hash_ring::DEFAULT_WEIGHT;

impl ClientConfig {
    pub fn default_reconnect_interval() -> u64 { 30 }

    pub fn default_keepalive_interval() -> u64 { 10 }

    pub fn default_max_messages_per_tick() -> usize { 100 }

    pub fn default_ring_weight() -> u32 { DEFAULT_WEIGHT }

    pub fn default_tick_interval_ms() -> u64 { 100 }

    /// Settings for a process at `self_bus_id` advertising `public_url`,
    /// with every timing knob at its default.
    pub fn new(self_bus_id: &str, public_url: &str) -> ClientConfig {
        ClientConfig {
            self_bus_id: self_bus_id.to_string(),
            public_url: public_url.to_string(),
            max_connection: 5000,
            report_encoding: ReportEncoding::default(),
            reconnect_interval: Self::default_reconnect_interval(),
            keepalive_interval: Self::default_keepalive_interval(),
            max_messages_per_tick: Self::default_max_messages_per_tick(),
            ring_weight: Self::default_ring_weight(),
            tick_interval_ms: Self::default_tick_interval_ms(),
        }
    }

    pub fn reconnect_interval_ms(&self) -> u64 {
        self.reconnect_interval.saturating_mul(1000)
    }

    pub fn keepalive_interval_ms(&self) -> u64 {
        self.keepalive_interval.saturating_mul(1000)
    }
}
