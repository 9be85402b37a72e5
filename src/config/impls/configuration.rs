use std::fs::File;
use std::io::Write;
use ahash::AHashSet;
use crate::bus::structs::bus_addr::BusAddr;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::client_config::ClientConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::peer_config::PeerConfig;
use crate::net::enums::head_length::HeadLength;
use crate::net::structs::endpoint::Endpoint;

pub const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: Some(60),
            client: ClientConfig::new("1.1.2.1", "tcp://127.0.0.1:9100"),
            peers: vec!(
                PeerConfig {
                    enabled: true,
                    bus_id: String::from("1.1.1.1"),
                    url: String::from("tcp://127.0.0.1:9001"),
                    head_length: HeadLength::ss
                },
                PeerConfig {
                    enabled: false,
                    bus_id: String::from("1.1.3.1"),
                    url: String::from("ws://127.0.0.1:9002"),
                    head_length: HeadLength::ss
                }
            )
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let data = toml::to_string(config)
            .map_err(|e| ConfigurationError::ValidationError(format!("could not serialize configuration: {}", e)))?;
        Self::save_file(path, data)
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        Self::load_from_path("config.toml", create)
    }

    /// Loads and validates `path`. When the file is missing or corrupt and
    /// `create` is set, a default file is written and an error is still
    /// returned so the operator can edit it first.
    pub fn load_from_path(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit the {} in the root folder, exiting now...", path);
                        Err(CustomError::new(&format!("create {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    /// Checks every value the client service parses at startup, so that a
    /// bad bus id or URL is reported before anything connects.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!("log_level \"{}\" is not one of {:?}", self.log_level, LOG_LEVELS)));
        }
        if self.log_console_interval == Some(0) {
            return Err(ConfigurationError::ValidationError(String::from("log_console_interval must be above 0")));
        }

        let client = &self.client;
        Self::validate_value("[CLIENT] self_bus_id", &client.self_bus_id, |v| BusAddr::parse(v).map(|_| ()).map_err(|e| e.to_string()))?;
        Self::validate_value("[CLIENT] public_url", &client.public_url, |v| Endpoint::parse(v).map(|_| ()).map_err(|e| e.to_string()))?;
        let intervals = [
            ("reconnect_interval", client.reconnect_interval),
            ("keepalive_interval", client.keepalive_interval),
            ("max_messages_per_tick", client.max_messages_per_tick as u64),
            ("ring_weight", client.ring_weight as u64),
            ("tick_interval_ms", client.tick_interval_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(ConfigurationError::ValidationError(format!("[CLIENT] {} must be above 0", name)));
            }
        }

        let mut seen = AHashSet::with_capacity(self.peers.len());
        for (index, peer) in self.peers.iter().enumerate() {
            let name = format!("[PEER {}] bus_id", index);
            Self::validate_value(&name, &peer.bus_id, |v| BusAddr::parse(v).map(|_| ()).map_err(|e| e.to_string()))?;
            let name = format!("[PEER {}] url", index);
            Self::validate_value(&name, &peer.url, |v| Endpoint::parse(v).map(|_| ()).map_err(|e| e.to_string()))?;
            let bus_id = BusAddr::parse(&peer.bus_id).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
            if !seen.insert(bus_id) {
                return Err(ConfigurationError::ValidationError(format!("[PEER {}] bus_id \"{}\" is listed twice", index, BusAddr::format(bus_id))));
            }
        }
        Ok(())
    }

    pub fn validate_value<F>(name: &str, value: &str, check: F) -> Result<(), ConfigurationError>
    where
        F: Fn(&str) -> Result<(), String>,
    {
        check(value).map_err(|e| {
            ConfigurationError::ValidationError(format!("Error checking {} [:] Value: \"{}\" [:] {}", name, value, e))
        })
    }

    pub fn enabled_peers(&self) -> impl Iterator<Item = &PeerConfig> {
        self.peers.iter().filter(|peer| peer.enabled)
    }
}
