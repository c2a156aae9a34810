use crate::policy::enums::host_pattern::HostPattern;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostMatcher {
    pub patterns: Vec<HostPattern>,
}
