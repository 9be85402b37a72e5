//! Concrete transports driven by the client service.
//!
//! Each transport owns one outbound session. Its socket lives on a tokio
//! runtime; the tokio tasks hand connection events and decoded messages to
//! the tick thread through lock-free queues, and outgoing frames travel the
//! other way through an unbounded channel.
//!
//! | Protocol | Transport         | Framing                                 |
//! |----------|-------------------|-----------------------------------------|
//! | `tcp`    | `TcpClient`       | header + body on a raw stream           |
//! | `ws`     | `WebSocketClient` | one header + body per binary message    |
//! | `udp`    | unsupported       | `start_client` is refused               |
//!
//! # Example
//!
//! ```rust,ignore
//! use busmesh::transport::structs::net_transport_factory::NetTransportFactory;
//!
//! let factory = NetTransportFactory::new(runtime.handle().clone());
//! let service = ClientService::new(config.client.clone(), factory, Arc::new(SystemClock))?;
//! ```

/// Per-protocol transport enumeration.
pub mod enums;

/// Transport structures and the factory.
pub mod structs;

/// Connect, read and write loops.
pub mod impls;
