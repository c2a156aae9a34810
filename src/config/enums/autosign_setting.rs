use serde::{Deserialize, Serialize};

/// Raw `autosign` value as written in `config.toml`.
///
/// Either `true`/`false` or a string that must be an absolute path to a
/// policy file. Validation happens when the policy is built, see
/// `AutosignMode::from_setting`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum AutosignSetting {
    Enabled(bool),
    File(String),
}

impl Default for AutosignSetting {
    fn default() -> Self {
        AutosignSetting::Enabled(false)
    }
}
