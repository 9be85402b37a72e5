//! # Busmesh
//!
//! Cluster connectivity layer for multi-process game servers.
//!
//! ## Overview
//!
//! Every process in the cluster (master, world, game, login, proxy) is
//! identified by a bus id and keeps outbound connections to a set of peer
//! processes. Busmesh drives those connections through connect, disconnect
//! and reconnect, announces this process to each peer with a periodic server
//! report, dispatches inbound messages by id, and routes shard-scoped
//! requests to a peer through a consistent-hash ring.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use busmesh::client::structs::client_service::ClientService;
//! use busmesh::common::structs::system_clock::SystemClock;
//! use busmesh::config::structs::configuration::Configuration;
//! use busmesh::transport::structs::net_transport_factory::NetTransportFactory;
//!
//! let config = Configuration::load_from_file(false)?;
//! let factory = NetTransportFactory::new(runtime.handle().clone());
//! let mut service = ClientService::new(config.client.clone(), factory, Arc::new(SystemClock))?;
//! service.start_client(target, endpoint, HeadLength::ss);
//! service.update();
//! ```
//!
//! ## Modules
//!
//! - [`bus`] - Bus address codec
//! - [`ring`] - Consistent-hash routing ring
//! - [`net`] - Endpoints, events, wire header and the transport capability
//! - [`transport`] - TCP and WebSocket transports
//! - [`client`] - Connection registry, state machine and dispatch
//! - [`protocol`] - Server report heartbeat
//! - [`config`] - Configuration management and TOML parsing
//! - [`stats`] - Connection and dispatch counters
//! - [`common`] - Errors and clocks
//! - [`logging`] - Logger setup

/// Bus address codec.
pub mod bus;

/// Peer connection lifecycle and message dispatch.
pub mod client;

/// Shared errors and time sources.
pub mod common;

/// Configuration management.
pub mod config;

/// Logger setup.
pub mod logging;

/// Network-facing types and the transport capability.
pub mod net;

/// Registration and heartbeat protocol.
pub mod protocol;

/// Consistent-hash routing ring.
pub mod ring;

/// Connection and dispatch statistics.
pub mod stats;

/// Command line arguments.
pub mod structs;

/// Concrete TCP and WebSocket transports.
pub mod transport;
