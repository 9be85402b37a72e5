//! Network-facing types shared by the client service and the transports.
//!
//! # Contents
//!
//! - `Endpoint`: protocol tag, IP, port and IPv6 flag, written as
//!   `tcp://1.2.3.4:9001` or `ws://[::1]:9002`
//! - `NetEvent`: connection state changes surfaced by a transport
//! - `MessageEnvelope`: one decoded inbound message
//! - `MsgHead` / `FrameDecoder`: the big-endian wire header and a streaming
//!   frame splitter
//! - `Transport` / `TransportFactory`: the capability set the client service
//!   drives, one implementation per protocol
//!
//! # Wire Header
//!
//! ```text
//! cs (6 bytes):  [msg_id: u16][body_len: u32]
//! ss (14 bytes): [msg_id: u16][body_len: u32][actor_id: u64]
//! ```

/// Protocol, event type and header length enumerations.
pub mod enums;

/// Endpoint, event, envelope and framing structures.
pub mod structs;

/// Parsing, encoding and decoding.
pub mod impls;

/// Transport capability traits.
pub mod traits;

/// Message id and session id aliases.
pub mod types;
