use crate::bus::types::BusId;
use crate::net::enums::head_length::HeadLength;
use crate::net::structs::endpoint::Endpoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConnection {
    pub target: BusId,
    pub endpoint: Endpoint,
    pub head_length: HeadLength,
}
