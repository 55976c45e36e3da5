//! Symlink from the install root to the running executable.

use super::Artifact;
use crate::error::{Error, Result, Step};
use crate::host::HostEnv;
use crate::layout::Layout;
use bundled::ResourceProvider;
use elevate::PrivilegedExecutor;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

const NAME: &str = "vmnet-symlink";

/// Privileged symlink pointing at the current executable.
#[derive(Debug, Clone)]
pub struct HelperSymlink {
    path: PathBuf,
    host: HostEnv,
}

impl HelperSymlink {
    /// Symlink location for `layout`, targeting the executable `host` runs.
    pub fn new(layout: &Layout, host: &HostEnv) -> Self {
        Self {
            path: layout.vmnet_symlink(),
            host: host.clone(),
        }
    }

    /// Where the link will point.
    ///
    /// Falls back to the raw invocation when PATH lookup finds nothing.
    pub fn target(&self) -> OsString {
        match self.host.resolve_executable() {
            Some(resolved) => resolved.into_os_string(),
            None => {
                log::warn!(
                    "Could not resolve executable {}, linking to it as given",
                    self.host.invocation().to_string_lossy()
                );
                self.host.invocation().to_os_string()
            }
        }
    }
}

impl Artifact for HelperSymlink {
    fn name(&self) -> &'static str {
        NAME
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn executable(&self) -> bool {
        true
    }

    fn materialize(
        &self,
        executor: &dyn PrivilegedExecutor,
        _resources: &dyn ResourceProvider,
    ) -> Result<()> {
        let target = self.target();

        executor
            .run_interactive(
                "ln",
                &[OsStr::new("-sfn"), target.as_os_str(), self.path.as_os_str()],
            )
            .map_err(|e| Error::privileged(NAME, Step::CreateSymlink, e))?;

        log::debug!(
            "Linked {} -> {}",
            self.path.display(),
            target.to_string_lossy()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use bundled::StaticResources;
    use elevate::RecordingExecutor;

    #[cfg(unix)]
    #[test]
    fn test_links_to_resolved_path() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let exe = temp.path().join("colima");
        fs::write(&exe, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();

        let host = HostEnv::new("x86_64", "colima").with_search_path(temp.path().as_os_str());
        let link = HelperSymlink::new(&Layout::default(), &host);
        let recorder = RecordingExecutor::new();

        link.materialize(&recorder, &StaticResources::new()).unwrap();

        let calls = recorder.invocations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "ln");
        assert_eq!(
            calls[0].args,
            [
                "-sfn".to_string(),
                exe.to_string_lossy().into_owned(),
                "/opt/colima/bin/colima-vmnet".to_string(),
            ]
        );
    }

    #[test]
    fn test_falls_back_to_invocation() {
        let empty = tempfile::tempdir().unwrap();
        let host = HostEnv::new("x86_64", "colima").with_search_path(empty.path().as_os_str());
        let link = HelperSymlink::new(&Layout::default(), &host);
        let recorder = RecordingExecutor::new();

        link.materialize(&recorder, &StaticResources::new()).unwrap();

        assert_eq!(
            recorder.invocations()[0].args,
            ["-sfn", "colima", "/opt/colima/bin/colima-vmnet"]
        );
    }

    #[test]
    fn test_link_failure() {
        let link = HelperSymlink::new(&Layout::default(), &HostEnv::new("x86_64", "colima"));
        let recorder = RecordingExecutor::failing_at(0);

        let err = link
            .materialize(&recorder, &StaticResources::new())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::PrivilegedOperationFailed);
        assert_eq!(err.step(), Step::CreateSymlink);
        assert_eq!(err.artifact(), "vmnet-symlink");
    }

    #[cfg(unix)]
    #[test]
    fn test_replaces_existing_file() {
        use elevate::DirectExecutor;
        use std::fs;

        let temp = tempfile::tempdir().unwrap();
        let layout = Layout::rooted_at(temp.path());
        fs::create_dir_all(layout.bin_dir()).unwrap();
        fs::write(layout.vmnet_symlink(), "old").unwrap();

        let host = HostEnv::new("x86_64", "/usr/local/bin/colima");
        let link = HelperSymlink::new(&layout, &host);

        let resources = StaticResources::new();
        link.materialize(&DirectExecutor, &resources).unwrap();
        link.materialize(&DirectExecutor, &resources).unwrap();

        assert_eq!(
            fs::read_link(layout.vmnet_symlink()).unwrap(),
            PathBuf::from("/usr/local/bin/colima")
        );
    }
}
