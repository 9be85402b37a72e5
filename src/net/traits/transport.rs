use crate::bus::types::BusId;
use crate::net::enums::head_length::HeadLength;
use crate::net::structs::message_envelope::MessageEnvelope;
use crate::net::structs::net_event::NetEvent;
use crate::net::types::SessionId;

/// Outbound connection to one peer.
///
/// Implementations may run background I/O workers; whatever they produce
/// reaches the tick thread only through `poll_event` and `poll_message`.
/// None of the methods may block.
pub trait Transport: Send {
    /// Begins an asynchronous connect. `false` means the attempt could not
    /// even be started.
    fn start_client(&mut self, head_length: HeadLength, target_bus_id: BusId, ip: &str, port: u16, ipv6: bool) -> bool;

    /// Pumps pending I/O without blocking.
    fn update(&mut self);

    /// Closes and releases every socket. Calling it twice is harmless.
    fn shutdown(&mut self);

    /// Queues an already framed message for the session.
    fn send(&mut self, data: &[u8], session_id: SessionId) -> bool;

    fn poll_event(&mut self) -> Option<NetEvent>;

    fn poll_message(&mut self) -> Option<MessageEnvelope>;
}
