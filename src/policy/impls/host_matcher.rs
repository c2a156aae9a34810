use std::path::Path;
use crate::policy::enums::host_pattern::HostPattern;
use crate::policy::structs::host_matcher::HostMatcher;

impl HostMatcher {
    pub fn parse(content: &str) -> HostMatcher {
        HostMatcher {
            patterns: content.lines().filter_map(HostPattern::parse).collect(),
        }
    }

    pub fn from_file(path: &Path) -> std::io::Result<HostMatcher> {
        Ok(Self::parse(&std::fs::read_to_string(path)?))
    }

    pub fn allows(&self, hostname: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(hostname))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
