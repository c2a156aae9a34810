use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use log::{error, info, warn};
use crate::config::enums::autosign_setting::AutosignSetting;
use crate::policy::enums::autosign_mode::AutosignMode;
use crate::policy::structs::autosign_policy::AutosignPolicy;
use crate::policy::structs::host_matcher::HostMatcher;

impl AutosignPolicy {
    pub fn new(mode: AutosignMode) -> AutosignPolicy {
        AutosignPolicy {
            mode,
            warned_missing: AtomicBool::new(false),
        }
    }

    /// Builds the policy from configuration. An invalid value is logged and
    /// the policy denies every hostname.
    pub fn from_setting(setting: &AutosignSetting) -> AutosignPolicy {
        match AutosignMode::from_setting(setting) {
            Ok(mode) => {
                info!("[AUTOSIGN] Autosign mode: {}", mode);
                Self::new(mode)
            }
            Err(e) => {
                error!("[AUTOSIGN] {}, autosigning is disabled", e);
                Self::new(AutosignMode::Never)
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn evaluate(&self, hostname: &str) -> bool {
        match &self.mode {
            AutosignMode::Always => true,
            AutosignMode::Never => false,
            AutosignMode::FileBased(path) => self.evaluate_file(path, hostname),
        }
    }

    fn evaluate_file(&self, path: &Path, hostname: &str) -> bool {
        if !path.exists() {
            if !self.warned_missing.swap(true, Ordering::AcqRel) {
                warn!("[AUTOSIGN] Autosign is enabled but {} is missing", path.display());
            }
            return false;
        }
        match HostMatcher::from_file(path) {
            Ok(matcher) => matcher.allows(hostname),
            Err(e) => {
                error!("[AUTOSIGN] Unable to read {}: {}", path.display(), e);
                false
            }
        }
    }
}
