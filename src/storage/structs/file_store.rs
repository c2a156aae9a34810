use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileStore {
    pub directory: PathBuf,
    pub extension: &'static str,
    /// Private entries keep the owner-only mode of the temporary file.
    pub private: bool,
}
