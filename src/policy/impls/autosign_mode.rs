use std::fmt;
use std::path::{Path, PathBuf};
use crate::ca::enums::ca_error::CaError;
use crate::config::enums::autosign_setting::AutosignSetting;
use crate::policy::enums::autosign_mode::AutosignMode;

impl AutosignMode {
    pub fn from_setting(setting: &AutosignSetting) -> Result<AutosignMode, CaError> {
        match setting {
            AutosignSetting::Enabled(true) => Ok(AutosignMode::Always),
            AutosignSetting::Enabled(false) => Ok(AutosignMode::Never),
            AutosignSetting::File(value) => {
                let value = value.trim();
                if value.eq_ignore_ascii_case("true") {
                    return Ok(AutosignMode::Always);
                }
                if value.eq_ignore_ascii_case("false") {
                    return Ok(AutosignMode::Never);
                }
                if !Path::new(value).is_absolute() {
                    return Err(CaError::PolicyFile(format!("{:?} is neither a boolean nor an absolute path", value)));
                }
                Ok(AutosignMode::FileBased(PathBuf::from(value)))
            }
        }
    }
}

impl fmt::Display for AutosignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutosignMode::Always => write!(f, "always"),
            AutosignMode::Never => write!(f, "never"),
            AutosignMode::FileBased(path) => write!(f, "file {}", path.display()),
        }
    }
}
