//! Directory-backed resource provider.

use crate::ResourceProvider;
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Resources stored as files under a root directory.
///
/// The name `network/sudo.txt` maps to `<root>/network/sudo.txt`. Names
/// that are absolute or contain `..` never resolve.
#[derive(Debug, Clone)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    /// Create a provider rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let contained = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));

        if name.is_empty() || !contained {
            return None;
        }

        Some(self.root.join(relative))
    }
}

impl ResourceProvider for DirResources {
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        let Some(path) = self.resolve(name) else {
            log::debug!("Rejected resource name outside root: {}", name);
            return Err(Error::not_found(name));
        };

        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(Error::not_found(name)),
            Err(source) => Err(Error::Io {
                name: name.to_string(),
                path,
                source,
            }),
        }
    }
}
