use std::fmt;
use std::str::FromStr;
use crate::common::enums::mesh_error::MeshError;
use crate::net::enums::protocol::Protocol;

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::tcp => "tcp",
            Protocol::udp => "udp",
            Protocol::ws => "ws",
        }
    }
}

impl FromStr for Protocol {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Protocol::tcp),
            "udp" => Ok(Protocol::udp),
            "ws" => Ok(Protocol::ws),
            other => Err(MeshError::Endpoint(format!("unknown protocol '{}'", other))),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
