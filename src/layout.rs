//! Install layout configuration
//!
//! Where the privileged files live. The defaults are the filesystem
//! contract that the VM network helper expects; overrides exist for
//! relocated installs and tests.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the sudoers drop-in.
pub const SUDOERS_FILE: &str = "colima";
/// File name of the network helper binary.
pub const VMNET_BINARY: &str = "vde_vmnet";
/// File name of the symlink to the running executable.
pub const VMNET_SYMLINK: &str = "colima-vmnet";

/// Directory layout for installed artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Sudo policy drop-in directory.
    pub sudoers_dir: PathBuf,
    /// Root-owned installation root.
    pub install_root: PathBuf,
    /// Scratch directory for staging archives (OS temp dir when unset).
    pub staging_dir: Option<PathBuf>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            sudoers_dir: PathBuf::from("/etc/sudoers.d"),
            install_root: PathBuf::from("/opt/colima"),
            staging_dir: None,
        }
    }
}

impl Layout {
    /// Layout with every path under `root` (for user-owned installs).
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            sudoers_dir: root.join("etc").join("sudoers.d"),
            install_root: root.join("opt").join("colima"),
            staging_dir: Some(root.join("tmp")),
        }
    }

    /// Parse a layout from TOML; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Path of the sudoers drop-in file.
    pub fn sudoers_path(&self) -> PathBuf {
        self.sudoers_dir.join(SUDOERS_FILE)
    }

    /// Directory holding privileged binaries.
    pub fn bin_dir(&self) -> PathBuf {
        self.install_root.join("bin")
    }

    /// Path of the network helper binary.
    pub fn vmnet_binary(&self) -> PathBuf {
        self.bin_dir().join(VMNET_BINARY)
    }

    /// Path of the symlink to the running executable.
    pub fn vmnet_symlink(&self) -> PathBuf {
        self.bin_dir().join(VMNET_SYMLINK)
    }

    /// Scratch directory for staged files.
    pub fn staging_dir(&self) -> PathBuf {
        self.staging_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let layout = Layout::default();
        assert_eq!(layout.sudoers_path(), PathBuf::from("/etc/sudoers.d/colima"));
        assert_eq!(layout.vmnet_binary(), PathBuf::from("/opt/colima/bin/vde_vmnet"));
        assert_eq!(
            layout.vmnet_symlink(),
            PathBuf::from("/opt/colima/bin/colima-vmnet")
        );
        assert_eq!(layout.staging_dir(), std::env::temp_dir());
    }

    #[test]
    fn test_paths_are_distinct() {
        let layout = Layout::default();
        let paths = [
            layout.sudoers_path(),
            layout.vmnet_binary(),
            layout.vmnet_symlink(),
        ];
        assert_ne!(paths[0], paths[1]);
        assert_ne!(paths[1], paths[2]);
        assert_ne!(paths[0], paths[2]);
    }

    #[test]
    fn test_from_toml_empty_is_default() {
        assert_eq!(Layout::from_toml_str("").unwrap(), Layout::default());
    }

    #[test]
    fn test_from_toml_overrides() {
        let layout = Layout::from_toml_str(
            r#"
install_root = "/usr/local/colima"
staging_dir = "/var/tmp"
"#,
        )
        .unwrap();

        assert_eq!(layout.sudoers_dir, PathBuf::from("/etc/sudoers.d"));
        assert_eq!(
            layout.vmnet_binary(),
            PathBuf::from("/usr/local/colima/bin/vde_vmnet")
        );
        assert_eq!(layout.staging_dir(), PathBuf::from("/var/tmp"));
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        assert!(Layout::from_toml_str("install_dir = \"/opt\"").is_err());
    }

    #[test]
    fn test_rooted_at() {
        let layout = Layout::rooted_at("/tmp/sandbox");
        assert_eq!(
            layout.sudoers_path(),
            PathBuf::from("/tmp/sandbox/etc/sudoers.d/colima")
        );
        assert_eq!(
            layout.vmnet_symlink(),
            PathBuf::from("/tmp/sandbox/opt/colima/bin/colima-vmnet")
        );
        assert_eq!(layout.staging_dir(), PathBuf::from("/tmp/sandbox/tmp"));
    }
}
