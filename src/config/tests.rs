#[cfg(test)]
mod config_tests {
    mod autosign_setting_tests {
        use crate::config::enums::autosign_setting::AutosignSetting;

        #[test]
        fn test_autosign_setting_default() {
            assert_eq!(AutosignSetting::default(), AutosignSetting::Enabled(false));
        }

        #[test]
        fn test_autosign_setting_deserialize_bool() {
            let setting: AutosignSetting = serde_json::from_str("true").unwrap();
            assert_eq!(setting, AutosignSetting::Enabled(true));
            let setting: AutosignSetting = serde_json::from_str("false").unwrap();
            assert_eq!(setting, AutosignSetting::Enabled(false));
        }

        #[test]
        fn test_autosign_setting_deserialize_path() {
            let setting: AutosignSetting = serde_json::from_str("\"/etc/fleet-ca/autosign.conf\"").unwrap();
            assert_eq!(setting, AutosignSetting::File(String::from("/etc/fleet-ca/autosign.conf")));
        }

        #[test]
        fn test_autosign_setting_serialize() {
            assert_eq!(serde_json::to_string(&AutosignSetting::Enabled(true)).unwrap(), "true");
            assert_eq!(
                serde_json::to_string(&AutosignSetting::File(String::from("/tmp/a"))).unwrap(),
                "\"/tmp/a\""
            );
        }
    }

    mod configuration_tests {
        use crate::config::enums::autosign_setting::AutosignSetting;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_configuration_init_is_valid() {
            let config = Configuration::init();
            assert!(Configuration::validate(&config).is_ok());
            assert_eq!(config.ca_config.autosign, AutosignSetting::Enabled(false));
            assert_eq!(config.api_server.len(), 1);
        }

        #[test]
        fn test_configuration_toml_roundtrip_keeps_autosign_path() {
            let mut config = Configuration::init();
            config.ca_config.autosign = AutosignSetting::File(String::from("/etc/fleet-ca/autosign.conf"));
            let data = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(data.as_bytes()).unwrap();
            assert_eq!(loaded.ca_config.autosign, config.ca_config.autosign);
            assert_eq!(loaded.ca_config.ssl_dir, "ssl");
        }

        #[test]
        fn test_configuration_load_with_boolean_autosign() {
            let data = r#"
                log_level = "debug"
                log_console_interval = 30

                [ca_config]
                enabled = true
                ssl_dir = "/var/lib/fleet-ca"
                ca_name = "Test CA"
                ca_ttl_days = 365
                autosign = true
                api_key = "secret"

                [[api_server]]
                enabled = true
                bind_address = "127.0.0.1:8140"
                real_ip = "X-Real-IP"
                keep_alive = 60
                request_timeout = 15
                disconnect_timeout = 15
                threads = 2
                ssl = false
                ssl_key = ""
                ssl_cert = ""
            "#;
            let config = Configuration::load(data.as_bytes()).unwrap();
            assert_eq!(config.ca_config.autosign, AutosignSetting::Enabled(true));
            assert_eq!(config.ca_config.ca_ttl_days, 365);
            assert!(Configuration::validate(&config).is_ok());
        }

        #[test]
        fn test_configuration_missing_autosign_defaults_to_disabled() {
            let data = r#"
                log_level = "info"
                log_console_interval = 60
                api_server = []

                [ca_config]
                enabled = false
                ssl_dir = "ssl"
                ca_name = "Test CA"
                ca_ttl_days = 10
                api_key = "secret"
            "#;
            let config = Configuration::load(data.as_bytes()).unwrap();
            assert_eq!(config.ca_config.autosign, AutosignSetting::Enabled(false));
        }

        #[test]
        fn test_configuration_invalid_toml() {
            assert!(Configuration::load(b"log_level = ").is_err());
        }

        #[test]
        fn test_validate_rejects_bad_bind_address() {
            let mut config = Configuration::init();
            config.api_server[0].bind_address = String::from("not-an-address");
            assert!(Configuration::validate(&config).is_err());
        }

        #[test]
        fn test_validate_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("verbose");
            assert!(Configuration::validate(&config).is_err());
        }

        #[test]
        fn test_validate_rejects_zero_ttl() {
            let mut config = Configuration::init();
            config.ca_config.ca_ttl_days = 0;
            assert!(Configuration::validate(&config).is_err());
        }

        #[test]
        fn test_validate_accepts_relative_autosign_path() {
            let mut config = Configuration::init();
            config.ca_config.autosign = AutosignSetting::File(String::from("autosign.conf"));
            assert!(Configuration::validate(&config).is_ok());
        }

        #[test]
        fn test_save_and_load_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            let data = toml::to_string(&Configuration::init()).unwrap();
            Configuration::save_file(path, data).unwrap();
            let loaded = Configuration::load_file(path).unwrap();
            assert_eq!(loaded.log_level, "info");
        }

        #[test]
        fn test_load_from_file_creates_default() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            assert!(Configuration::load_from_file(path, false).is_err());
            assert!(Configuration::load_from_file(path, true).is_err());
            assert!(Configuration::load_from_file(path, false).is_ok());
        }
    }
}
