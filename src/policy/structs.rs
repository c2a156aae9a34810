/// Parsed allow-list.
pub mod host_matcher;

/// Autosign decision with its one-time warning state.
pub mod autosign_policy;
