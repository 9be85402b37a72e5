use crate::bus::types::BusId;
use crate::net::enums::head_length::HeadLength;
use crate::net::enums::protocol::Protocol;
use crate::net::structs::message_envelope::MessageEnvelope;
use crate::net::structs::net_event::NetEvent;
use crate::net::traits::transport::Transport;
use crate::net::types::SessionId;
use crate::transport::enums::net_transport::NetTransport;

impl NetTransport {
    pub fn protocol(&self) -> Protocol {
        match self {
            NetTransport::Tcp(_) => Protocol::tcp,
            NetTransport::Ws(_) => Protocol::ws,
        }
    }

    fn inner(&mut self) -> &mut dyn Transport {
        match self {
            NetTransport::Tcp(client) => client,
            NetTransport::Ws(client) => client,
        }
    }
}

impl Transport for NetTransport {
    fn start_client(&mut self, head_length: HeadLength, target_bus_id: BusId, ip: &str, port: u16, ipv6: bool) -> bool {
        self.inner().start_client(head_length, target_bus_id, ip, port, ipv6)
    }

    fn update(&mut self) {
        self.inner().update()
    }

    fn shutdown(&mut self) {
        self.inner().shutdown()
    }

    fn send(&mut self, data: &[u8], session_id: SessionId) -> bool {
        self.inner().send(data, session_id)
    }

    fn poll_event(&mut self) -> Option<NetEvent> {
        self.inner().poll_event()
    }

    fn poll_message(&mut self) -> Option<MessageEnvelope> {
        self.inner().poll_message()
    }
}
