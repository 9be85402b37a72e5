use std::fmt;
use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::common::enums::mesh_error::MeshError;
use crate::net::enums::protocol::Protocol;
use crate::net::structs::endpoint::Endpoint;

static ENDPOINT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<proto>[a-z]+)://(?:\[(?P<ip6>[0-9A-Fa-f:.]+)\]|(?P<host>[^:/\[\]]+)):(?P<port>[0-9]{1,5})/?$")
        .expect("endpoint regex is valid")
});

impl Endpoint {
    pub fn new(protocol: Protocol, ip: &str, port: u16) -> Endpoint {
        Endpoint {
            protocol,
            ip: ip.to_string(),
            port,
            ipv6: ip.contains(':'),
        }
    }

    pub fn tcp(ip: &str, port: u16) -> Endpoint {
        Endpoint::new(Protocol::tcp, ip, port)
    }

    pub fn ws(ip: &str, port: u16) -> Endpoint {
        Endpoint::new(Protocol::ws, ip, port)
    }

    /// Parses `proto://host:port`; an IPv6 host must be bracketed.
    pub fn parse(url: &str) -> Result<Endpoint, MeshError> {
        let captures = ENDPOINT_REGEX
            .captures(url)
            .ok_or_else(|| MeshError::Endpoint(format!("'{}' is not proto://host:port", url)))?;
        let protocol: Protocol = captures["proto"].parse()?;
        let port: u16 = captures["port"]
            .parse()
            .map_err(|_| MeshError::Endpoint(format!("'{}' has an invalid port", url)))?;
        let (ip, ipv6) = match (captures.name("ip6"), captures.name("host")) {
            (Some(ip6), _) => (ip6.as_str().to_string(), true),
            (None, Some(host)) => (host.as_str().to_string(), false),
            (None, None) => return Err(MeshError::Endpoint(format!("'{}' has no host", url))),
        };
        Ok(Endpoint { protocol, ip, port, ipv6 })
    }

    /// `host:port` with brackets around IPv6 hosts.
    pub fn socket_addr_string(&self) -> String {
        if self.ipv6 {
            format!("[{}]:{}", self.ip, self.port)
        } else {
            format!("{}:{}", self.ip, self.port)
        }
    }

    pub fn url(&self) -> String {
        format!("{}://{}", self.protocol, self.socket_addr_string())
    }
}

impl FromStr for Endpoint {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::parse(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
