use log::warn;
use tokio::runtime::Handle;
use crate::net::enums::protocol::Protocol;
use crate::net::traits::transport_factory::TransportFactory;
use crate::transport::enums::net_transport::NetTransport;
use crate::transport::structs::net_transport_factory::NetTransportFactory;
use crate::transport::structs::tcp_client::TcpClient;
use crate::transport::structs::web_socket_client::WebSocketClient;

impl NetTransportFactory {
    pub fn new(runtime: Handle) -> NetTransportFactory {
        NetTransportFactory { runtime }
    }
}

impl TransportFactory for NetTransportFactory {
    type Transport = NetTransport;

    fn supports(&self, protocol: Protocol) -> bool {
        matches!(protocol, Protocol::tcp | Protocol::ws)
    }

    fn create(&self, protocol: Protocol) -> Option<NetTransport> {
        match protocol {
            Protocol::tcp => Some(NetTransport::Tcp(TcpClient::new(self.runtime.clone()))),
            Protocol::ws => Some(NetTransport::Ws(WebSocketClient::new(self.runtime.clone()))),
            Protocol::udp => {
                warn!("[TRANSPORT] UDP transport is not available");
                None
            }
        }
    }
}
