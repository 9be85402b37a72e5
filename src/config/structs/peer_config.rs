use serde::{Deserialize, Serialize};
use crate::net::enums::head_length::HeadLength;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PeerConfig {
    pub enabled: bool,
    pub bus_id: String,
    pub url: String,
    #[serde(default)]
    pub head_length: HeadLength
}
