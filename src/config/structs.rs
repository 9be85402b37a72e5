//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// This process and its connection timing settings.
pub mod client_config;

/// One peer to connect to.
pub mod peer_config;
