use serde::{Deserialize, Serialize};
use crate::config::structs::client_config::ClientConfig;
use crate::config::structs::peer_config::PeerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: Option<u64>,
    pub client: ClientConfig,
    #[serde(default)]
    pub peers: Vec<PeerConfig>
}
