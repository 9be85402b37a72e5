use crate::bus::types::BusId;
use crate::client::enums::connection_state::ConnectionState;
use crate::client::structs::connection_entry::ConnectionEntry;
use crate::net::enums::head_length::HeadLength;
use crate::net::structs::endpoint::Endpoint;
use crate::net::traits::transport::Transport;
use crate::net::traits::transport_factory::TransportFactory;

impl<T: Transport> ConnectionEntry<T> {
    pub fn new(target: BusId, endpoint: Endpoint, head_length: HeadLength, now_ms: u64) -> ConnectionEntry<T> {
        ConnectionEntry {
            target,
            endpoint,
            head_length,
            state: ConnectionState::Disconnected,
            last_active_ms: now_ms,
            session_id: None,
            transport: None,
        }
    }

    /// Replaces the transport with a fresh one from `factory` and starts it.
    ///
    /// The previous transport is shut down before it is released. A
    /// transport that fails to start is discarded as well.
    pub fn connect<F>(&mut self, factory: &F) -> bool
    where
        F: TransportFactory<Transport = T>,
    {
        self.shutdown_transport();
        let Some(mut transport) = factory.create(self.endpoint.protocol) else {
            return false;
        };
        let started = transport.start_client(
            self.head_length,
            self.target,
            &self.endpoint.ip,
            self.endpoint.port,
            self.endpoint.ipv6,
        );
        if started {
            self.transport = Some(transport);
        } else {
            transport.shutdown();
        }
        started
    }

    pub fn shutdown_transport(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            transport.shutdown();
        }
        self.session_id = None;
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }
}

impl<T: Transport> Drop for ConnectionEntry<T> {
    fn drop(&mut self) {
        self.shutdown_transport();
    }
}
