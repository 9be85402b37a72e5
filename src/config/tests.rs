#[cfg(test)]
mod config_tests {
    mod client_config_tests {
        use crate::config::structs::client_config::ClientConfig;
        use crate::protocol::enums::report_encoding::ReportEncoding;

        #[test]
        fn test_client_config_defaults() {
            let client = ClientConfig::new("1.1.2.1", "tcp://127.0.0.1:9100");
            assert_eq!(client.reconnect_interval, 30);
            assert_eq!(client.keepalive_interval, 10);
            assert_eq!(client.max_messages_per_tick, 100);
            assert_eq!(client.ring_weight, 100);
            assert_eq!(client.tick_interval_ms, 100);
            assert_eq!(client.report_encoding, ReportEncoding::msgpack);
        }

        #[test]
        fn test_interval_millis() {
            let client = ClientConfig::new("1.1.2.1", "tcp://127.0.0.1:9100");
            assert_eq!(client.reconnect_interval_ms(), 30_000);
            assert_eq!(client.keepalive_interval_ms(), 10_000);
        }

        #[test]
        fn test_missing_timing_fields_use_defaults() {
            let toml_str = r#"
                self_bus_id = "1.1.2.1"
                public_url = "tcp://127.0.0.1:9100"
                max_connection = 10
            "#;
            let client: ClientConfig = toml::from_str(toml_str).unwrap();
            assert_eq!(client.reconnect_interval, 30);
            assert_eq!(client.keepalive_interval, 10);
            assert_eq!(client.max_connection, 10);
        }
    }

    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;
        use crate::net::enums::head_length::HeadLength;

        #[test]
        fn test_init_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
            assert_eq!(config.log_level, "info");
            assert_eq!(config.enabled_peers().count(), 1);
        }

        #[test]
        fn test_toml_round_trip() {
            let config = Configuration::init();
            let toml_str = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(toml_str.as_bytes()).unwrap();
            assert_eq!(loaded.client, config.client);
            assert_eq!(loaded.peers, config.peers);
        }

        #[test]
        fn test_peer_head_length_defaults_to_ss() {
            let toml_str = r#"
                log_level = "debug"

                [client]
                self_bus_id = "1.1.2.1"
                public_url = "tcp://127.0.0.1:9100"
                max_connection = 10

                [[peers]]
                enabled = true
                bus_id = "1.1.1.1"
                url = "tcp://127.0.0.1:9001"
            "#;
            let config = Configuration::load(toml_str.as_bytes()).unwrap();
            assert_eq!(config.peers[0].head_length, HeadLength::ss);
            assert_eq!(config.log_console_interval, None);
        }

        #[test]
        fn test_validate_rejects_bad_bus_id() {
            let mut config = Configuration::init();
            config.client.self_bus_id = String::from("1.1.256.1");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_validate_rejects_bad_peer_url() {
            let mut config = Configuration::init();
            config.peers[0].url = String::from("127.0.0.1:9001");
            let error = config.validate().unwrap_err();
            assert!(error.to_string().contains("[PEER 0] url"));
        }

        #[test]
        fn test_validate_rejects_zero_interval() {
            let mut config = Configuration::init();
            config.client.reconnect_interval = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("verbose");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_duplicate_peer() {
            let mut config = Configuration::init();
            config.peers[1].bus_id = config.peers[0].bus_id.clone();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_duplicate_peer_written_differently() {
            let mut config = Configuration::init();
            config.peers[0].bus_id = String::from("1.1.1.1");
            config.peers[1].bus_id = String::from("01.1.001.1");
            let error = config.validate().unwrap_err();
            assert!(error.to_string().contains("[PEER 1] bus_id \"1.1.1.1\" is listed twice"));
        }

        #[test]
        fn test_load_parse_error() {
            assert!(Configuration::load(b"log_level = ").is_err());
        }
    }
}
