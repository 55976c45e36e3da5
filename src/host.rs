//! Host facts consumed by the installer: architecture, `argv[0]`, and a
//! PATH lookup for resolving the running executable.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Snapshot of the host environment.
#[derive(Debug, Clone)]
pub struct HostEnv {
    arch: String,
    invocation: OsString,
    search_path: Option<OsString>,
    cwd: Option<PathBuf>,
}

impl HostEnv {
    /// Capture the current process's environment.
    pub fn current() -> Self {
        Self {
            arch: env::consts::ARCH.to_string(),
            invocation: env::args_os().next().unwrap_or_default(),
            search_path: env::var_os("PATH"),
            cwd: env::current_dir().ok(),
        }
    }

    /// Build a host description from explicit facts, with no PATH.
    pub fn new(arch: impl Into<String>, invocation: impl Into<OsString>) -> Self {
        Self {
            arch: arch.into(),
            invocation: invocation.into(),
            search_path: None,
            cwd: None,
        }
    }

    /// Use `search_path` (PATH syntax) for executable lookup.
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    /// Resolve relative invocations against `cwd`.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Architecture identifier (e.g. `x86_64`, `aarch64`).
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// How the program was invoked (`argv[0]`).
    pub fn invocation(&self) -> &OsStr {
        &self.invocation
    }

    /// Resolve the invocation to an executable path through PATH lookup.
    ///
    /// Returns `None` when nothing resolves.
    pub fn resolve_executable(&self) -> Option<PathBuf> {
        if self.invocation.is_empty() {
            return None;
        }

        let cwd = self
            .cwd
            .clone()
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("/"));

        match which::which_in(&self.invocation, self.search_path.as_ref(), cwd) {
            Ok(path) => Some(path),
            Err(err) => {
                log::debug!(
                    "Could not resolve {}: {}",
                    self.invocation.to_string_lossy(),
                    err
                );
                None
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn write_executable(path: &Path) {
        fs::write(path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_resolves_bare_name_through_search_path() {
        let temp = tempfile::tempdir().unwrap();
        let bin = temp.path().join("bin");
        fs::create_dir(&bin).unwrap();
        write_executable(&bin.join("colima"));

        let host = HostEnv::new("x86_64", "colima").with_search_path(bin.as_os_str());
        assert_eq!(host.resolve_executable(), Some(bin.join("colima")));
    }

    #[test]
    fn test_resolves_relative_path_against_cwd() {
        let temp = tempfile::tempdir().unwrap();
        write_executable(&temp.path().join("colima"));

        let host = HostEnv::new("aarch64", "./colima").with_cwd(temp.path());
        let resolved = host.resolve_executable().unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("colima"));
    }

    #[test]
    fn test_unresolvable_is_none() {
        let temp = tempfile::tempdir().unwrap();
        let host = HostEnv::new("x86_64", "colima").with_search_path(temp.path().as_os_str());
        assert_eq!(host.resolve_executable(), None);
        assert_eq!(host.invocation(), "colima");
    }

    #[test]
    fn test_empty_invocation_is_none() {
        let host = HostEnv::new("x86_64", "");
        assert_eq!(host.resolve_executable(), None);
    }

    #[test]
    fn test_current_captures_arch() {
        let host = HostEnv::current();
        assert_eq!(host.arch(), std::env::consts::ARCH);
    }
}
