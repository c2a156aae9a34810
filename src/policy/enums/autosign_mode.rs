use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutosignMode {
    Always,
    Never,
    FileBased(PathBuf),
}
