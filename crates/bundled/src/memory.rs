//! In-memory resource provider.

use crate::ResourceProvider;
use crate::error::{Error, Result};
use std::borrow::Cow;
use std::collections::HashMap;

/// Resources held in memory, keyed by name.
///
/// Static byte slices (from `include_bytes!`) are stored without copying.
#[derive(Debug, Clone, Default)]
pub struct StaticResources {
    entries: HashMap<String, Cow<'static, [u8]>>,
}

impl StaticResources {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, builder style.
    pub fn with(mut self, name: impl Into<String>, bytes: &'static [u8]) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Add or replace a resource.
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) {
        self.entries.insert(name.into(), bytes.into());
    }

    /// Whether a resource with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names of all resources, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ResourceProvider for StaticResources {
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        self.entries
            .get(name)
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| Error::not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let resources = StaticResources::new()
            .with("network/vmnet_x86_64.tar.gz", b"x86")
            .with("network/vmnet_arm64.tar.gz", b"arm");

        assert_eq!(resources.read_bytes("network/vmnet_arm64.tar.gz").unwrap(), b"arm");
        assert!(resources.contains("network/vmnet_x86_64.tar.gz"));
        assert_eq!(
            resources.names(),
            ["network/vmnet_arm64.tar.gz", "network/vmnet_x86_64.tar.gz"]
        );
    }

    #[test]
    fn test_missing_is_not_found() {
        let resources = StaticResources::new();
        let err = resources.read_bytes("network/sudo.txt").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.name(), "network/sudo.txt");
    }

    #[test]
    fn test_insert_owned_replaces() {
        let mut resources = StaticResources::new().with("a", b"old");
        resources.insert("a", b"new".to_vec());
        assert_eq!(resources.read_bytes("a").unwrap(), b"new");
    }
}
