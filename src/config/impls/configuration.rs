use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::path::Path;
use std::thread::available_parallelism;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::autosign_setting::AutosignSetting;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::ca_config::CaConfig;
use crate::config::structs::configuration::Configuration;
use crate::policy::enums::autosign_mode::AutosignMode;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            ca_config: CaConfig {
                enabled: true,
                ssl_dir: String::from("ssl"),
                ca_name: String::from("fleet-ca"),
                ca_ttl_days: 1825,
                autosign: AutosignSetting::Enabled(false),
                api_key: String::from("MyApiKey"),
            },
            api_server: vec!(
                ApiServerConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8140"),
                    real_ip: String::from("X-Real-IP"),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    threads: available_parallelism().map(|n| n.get() as u64).unwrap_or(1),
                    ssl: false,
                    ssl_key: String::from(""),
                    ssl_cert: String::from(""),
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
                    Ok(cfg) => {
                        Ok(cfg)
                    }
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

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically the config file"));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())
                    .map_err(|e| CustomError::new(&format!("could not serialize default config: {e}")))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(&config)?;
        Ok(config)
    }

    /// Checks the values that would otherwise only fail once a listener or
    /// the signer starts. An invalid autosign value is reported but accepted:
    /// the policy built from it denies every request.
    pub fn validate(config: &Configuration) -> Result<(), CustomError> {
        match config.log_level.as_str() {
            "off" | "trace" | "debug" | "info" | "warn" | "error" => {}
            level => {
                return Err(CustomError::new(&format!("[VALIDATE] Unknown log level '{level}'")));
            }
        }
        if config.ca_config.ssl_dir.trim().is_empty() {
            return Err(CustomError::new("[VALIDATE] ca_config.ssl_dir can not be empty"));
        }
        if config.ca_config.ca_ttl_days == 0 {
            return Err(CustomError::new("[VALIDATE] ca_config.ca_ttl_days must be larger than 0"));
        }
        if config.ca_config.ca_name.trim().is_empty() {
            return Err(CustomError::new("[VALIDATE] ca_config.ca_name can not be empty"));
        }
        for api_server in config.api_server.iter().filter(|server| server.enabled) {
            if api_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(CustomError::new(&format!(
                    "[VALIDATE] Invalid bind address '{}'", api_server.bind_address
                )));
            }
            if api_server.ssl && (api_server.ssl_key.is_empty() || api_server.ssl_cert.is_empty()) {
                return Err(CustomError::new(&format!(
                    "[VALIDATE] SSL enabled on {} without ssl_key or ssl_cert", api_server.bind_address
                )));
            }
        }
        if let Err(error) = AutosignMode::from_setting(&config.ca_config.autosign) {
            eprintln!("[VALIDATE] {error}, autosigning will deny every request");
        }
        Ok(())
    }

    pub fn ssl_path(&self) -> &Path {
        Path::new(&self.ca_config.ssl_dir)
    }
}
