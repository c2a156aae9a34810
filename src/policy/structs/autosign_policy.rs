use std::sync::atomic::AtomicBool;
use crate::policy::enums::autosign_mode::AutosignMode;

#[derive(Debug)]
pub struct AutosignPolicy {
    pub mode: AutosignMode,
    pub(crate) warned_missing: AtomicBool,
}
