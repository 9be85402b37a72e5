//! Peer connection lifecycle and message dispatch.
//!
//! `ClientService` owns every outbound peer connection of this process and is
//! driven by a single periodic `update` call from the application's main
//! loop. Each tick it:
//!
//! 1. promotes connection requests queued by `start_client` into the
//!    registry and starts them
//! 2. advances every entry's state machine, pumping its transport
//! 3. applies connect/disconnect events to the hash ring and the peer index,
//!    then fires event callbacks
//! 4. dispatches a bounded number of inbound messages per connection
//! 5. sends the server report heartbeat on live connections
//!
//! # State Machine
//!
//! ```text
//!              start ok                Connected event
//!  (promoted) ─────────► Connecting ─────────────────► Connected
//!      │                   ▲    │                          │
//!      │ start failed      │    │ Disconnected event       │ Disconnected event
//!      ▼                   │    ▼                          ▼
//!  Reconnecting ◄──────────┼─ Disconnected ◄───────────────┘
//!      │   interval elapsed│
//!      └───────────────────┘
//! ```
//!
//! Nothing here blocks: transports are polled, and the reconnect and
//! keepalive waits compare timestamps from the injected `Clock`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use busmesh::client::structs::client_service::ClientService;
//! use busmesh::common::structs::system_clock::SystemClock;
//!
//! let mut service = ClientService::new(config.client.clone(), factory, Arc::new(SystemClock))?;
//! service.register_handler(100, Box::new(|msg| println!("{:?}", msg)))?;
//! service.start_client(BusAddr::parse("1.1.1.1")?, Endpoint::parse("tcp://127.0.0.1:9001")?, HeadLength::ss);
//! loop {
//!     service.update();
//! }
//! ```

/// Connection state enumeration.
pub mod enums;

/// Registry, entry, dispatcher and service structures.
pub mod structs;

/// State machine and dispatch logic.
pub mod impls;

/// Handler type aliases.
pub mod types;
