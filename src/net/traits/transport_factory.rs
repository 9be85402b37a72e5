use crate::net::enums::protocol::Protocol;
use crate::net::traits::transport::Transport;

pub trait TransportFactory {
    type Transport: Transport;

    fn supports(&self, protocol: Protocol) -> bool;

    /// A fresh, unstarted transport, `None` for unsupported protocols.
    fn create(&self, protocol: Protocol) -> Option<Self::Transport>;
}
