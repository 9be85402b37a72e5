use std::fs;
use tempfile::TempDir;
use busmesh::config::structs::configuration::Configuration;
use busmesh::net::enums::head_length::HeadLength;
use busmesh::protocol::enums::report_encoding::ReportEncoding;

#[test]
fn test_config_save_and_load_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();

    let mut config = Configuration::init();
    config.client.report_encoding = ReportEncoding::json;
    Configuration::save_from_config(path, &config).unwrap();

    let loaded = Configuration::load_file(path).unwrap();
    assert_eq!(loaded.client, config.client);
    assert_eq!(loaded.peers, config.peers);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_config_toml_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "warn"
log_console_interval = 30

[client]
self_bus_id = "1.1.2.1"
public_url = "ws://[::1]:9100"
max_connection = 100
report_encoding = "json"
reconnect_interval = 5
keepalive_interval = 2

[[peers]]
enabled = true
bus_id = "1.1.1.1"
url = "tcp://127.0.0.1:9001"
head_length = "cs"

[[peers]]
enabled = false
bus_id = "1.1.3.1"
url = "ws://127.0.0.1:9002"
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_from_path(config_path.to_str().unwrap(), false).unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.client.reconnect_interval, 5);
    assert_eq!(config.client.max_messages_per_tick, 100, "Missing fields fall back to defaults");
    assert_eq!(config.peers[0].head_length, HeadLength::cs);
    assert_eq!(config.enabled_peers().count(), 1);
}

#[test]
fn test_missing_config_is_created_on_request() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_str().unwrap();

    assert!(Configuration::load_from_path(path, false).is_err());
    assert!(!config_path.exists(), "Nothing is written without --create-config");

    assert!(Configuration::load_from_path(path, true).is_err(), "Operator must edit the new file first");
    assert!(config_path.exists());
    assert!(Configuration::load_from_path(path, false).is_ok());
}

#[test]
fn test_invalid_config_is_rejected_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let mut config = Configuration::init();
    config.peers[0].bus_id = String::from("1.1.1");
    Configuration::save_from_config(config_path.to_str().unwrap(), &config).unwrap();

    let error = Configuration::load_from_path(config_path.to_str().unwrap(), false).unwrap_err();
    assert!(error.to_string().contains("[PEER 0] bus_id"));
}
