use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BusAddr {
    pub channel: u8,
    pub zone: u8,
    pub app_type: u8,
    pub instance: u8,
}
