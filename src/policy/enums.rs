/// How autosigning is decided.
pub mod autosign_mode;

/// One allow-list line.
pub mod host_pattern;
