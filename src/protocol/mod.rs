//! Registration and heartbeat protocol exchanged with connected peers.
//!
//! Right after a connection comes up the client sends a server report that
//! describes this process: its bus id, current online count, public
//! endpoint, capacity and logic status. The same report is re-sent on every
//! keepalive interval while the connection stays up, refreshing the peer's
//! view and acting as the connection heartbeat.
//!
//! # Encodings
//!
//! The report body is encoded as MessagePack (default) or JSON, selected by
//! `report_encoding` in the client configuration.

/// Logic status, payload encoding and encoding error enumerations.
pub mod enums;

/// Server report structure.
pub mod structs;

/// Report construction and error formatting.
pub mod impls;

/// Payload encoder/decoder.
pub mod encoding;


use crate::net::types::MsgId;

/// Message id of the server report.
pub const SERVER_REPORT_MSG_ID: MsgId = 8;
