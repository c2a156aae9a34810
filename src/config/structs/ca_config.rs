use serde::{Deserialize, Serialize};
use crate::config::enums::autosign_setting::AutosignSetting;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CaConfig {
    /// When disabled the handler answers every request as "not a CA".
    pub enabled: bool,
    pub ssl_dir: String,
    pub ca_name: String,
    pub ca_ttl_days: u32,
    #[serde(default)]
    pub autosign: AutosignSetting,
    pub api_key: String,
}
