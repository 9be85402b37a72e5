//! Configuration management module.
//!
//! Loads, writes and validates `config.toml`.
//!
//! # Configuration Structure
//!
//! - top level: `log_level` and `log_console_interval`
//! - **client**: this process (bus id, advertised URL, capacity) and the
//!   connection timing knobs
//! - **peers**: one entry per peer to keep a connection to
//!
//! ```toml
//! log_level = "info"
//! log_console_interval = 60
//!
//! [client]
//! self_bus_id = "1.1.2.1"
//! public_url = "tcp://127.0.0.1:9100"
//! max_connection = 5000
//! report_encoding = "msgpack"
//! reconnect_interval = 30
//! keepalive_interval = 10
//! max_messages_per_tick = 100
//! ring_weight = 100
//! tick_interval_ms = 100
//!
//! [[peers]]
//! enabled = true
//! bus_id = "1.1.1.1"
//! url = "tcp://127.0.0.1:9001"
//! head_length = "ss"
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use busmesh::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false)?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Loading, saving and validation.
pub mod impls;

/// Unit tests for configuration.
pub mod tests;
