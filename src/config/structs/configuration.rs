use serde::{Deserialize, Serialize};
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::ca_config::CaConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub ca_config: CaConfig,
    pub api_server: Vec<ApiServerConfig>
}
