/// AutosignMode implementation: building the mode from configuration.
pub mod autosign_mode;

/// HostPattern implementation: parsing and matching a single line.
pub mod host_pattern;

/// HostMatcher implementation.
pub mod host_matcher;

/// AutosignPolicy implementation: evaluation.
pub mod autosign_policy;
