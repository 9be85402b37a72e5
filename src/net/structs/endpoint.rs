use serde::{Deserialize, Serialize};
use crate::net::enums::protocol::Protocol;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub protocol: Protocol,
    pub ip: String,
    pub port: u16,
    pub ipv6: bool,
}
