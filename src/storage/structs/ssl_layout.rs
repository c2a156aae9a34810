use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SslLayout {
    pub root: PathBuf,
}
