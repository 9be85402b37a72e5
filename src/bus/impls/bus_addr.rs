use std::fmt;
use std::str::FromStr;
use byteorder::{BigEndian, ByteOrder};
use crate::bus::enums::app_type::AppType;
use crate::bus::structs::bus_addr::BusAddr;
use crate::bus::types::BusId;
use crate::common::enums::mesh_error::MeshError;

impl BusAddr {
    pub fn new(channel: u8, zone: u8, app_type: u8, instance: u8) -> BusAddr {
        BusAddr { channel, zone, app_type, instance }
    }

    pub fn encode(channel: u8, zone: u8, app_type: u8, instance: u8) -> BusId {
        BusAddr::new(channel, zone, app_type, instance).bus_id()
    }

    pub fn decode(bus_id: BusId) -> BusAddr {
        let mut bytes = [0u8; 4];
        BigEndian::write_u32(&mut bytes, bus_id);
        BusAddr::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Parses the dotted form into a packed bus id.
    ///
    /// Exactly four fields are required, each a plain decimal number in
    /// `0..=255`; signs, whitespace and empty fields are rejected.
    pub fn parse(value: &str) -> Result<BusId, MeshError> {
        let fields: Vec<&str> = value.split('.').collect();
        if fields.len() != 4 {
            return Err(MeshError::Format(format!("'{}' must have 4 fields, found {}", value, fields.len())));
        }
        let mut bytes = [0u8; 4];
        for (index, field) in fields.iter().enumerate() {
            if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MeshError::Format(format!("'{}' field {} is not a number", value, index)));
            }
            bytes[index] = field.parse::<u8>().map_err(|_| {
                MeshError::Format(format!("'{}' field {} is out of range 0-255", value, index))
            })?;
        }
        Ok(BigEndian::read_u32(&bytes))
    }

    pub fn format(bus_id: BusId) -> String {
        BusAddr::decode(bus_id).to_string()
    }

    pub fn bus_id(&self) -> BusId {
        BigEndian::read_u32(&[self.channel, self.zone, self.app_type, self.instance])
    }

    pub fn role(&self) -> AppType {
        AppType::from_u8(self.app_type)
    }
}

impl From<BusId> for BusAddr {
    fn from(bus_id: BusId) -> Self {
        BusAddr::decode(bus_id)
    }
}

impl From<BusAddr> for BusId {
    fn from(addr: BusAddr) -> Self {
        addr.bus_id()
    }
}

impl FromStr for BusAddr {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BusAddr::parse(s).map(BusAddr::decode)
    }
}

impl fmt::Display for BusAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.channel, self.zone, self.app_type, self.instance)
    }
}
