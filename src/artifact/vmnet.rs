//! Network helper bundle (`vde_vmnet` and friends).
//!
//! The bundle ships as a gzip-compressed tar archive per architecture. It is
//! staged into a local temp file, then extracted in place by a privileged
//! `tar` so every file in the archive overwrites its counterpart.

use super::{Artifact, create_dir, parent_dir};
use crate::error::{Error, Result, Step};
use crate::host::HostEnv;
use crate::layout::Layout;
use crate::platform::Arch;
use bundled::ResourceProvider;
use elevate::PrivilegedExecutor;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const NAME: &str = "vmnet";

const EXTRACT_SCRIPT: &str = r#"cd "$1" && tar xzf "$2""#;

/// Bundled archive name for an architecture.
pub fn resource_name(arch: Arch) -> String {
    format!("network/vmnet_{}.tar.gz", arch.suffix())
}

/// Architecture-specific helper bundle in the privileged binary directory.
#[derive(Debug, Clone)]
pub struct NetworkHelperBundle {
    path: PathBuf,
    arch: Arch,
    staging_dir: PathBuf,
}

impl NetworkHelperBundle {
    /// Bundle for the host's architecture.
    pub fn new(layout: &Layout, host: &HostEnv) -> Self {
        Self::for_arch(layout, Arch::from_identifier(host.arch()))
    }

    /// Bundle for an explicit architecture.
    pub fn for_arch(layout: &Layout, arch: Arch) -> Self {
        Self {
            path: layout.vmnet_binary(),
            arch,
            staging_dir: layout.staging_dir(),
        }
    }

    /// Architecture whose payload will be installed.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Write the archive into a uniquely named scratch file.
    ///
    /// The file is removed on drop, best effort.
    fn stage(&self, archive: &[u8]) -> Result<NamedTempFile> {
        let mut staged = tempfile::Builder::new()
            .prefix("vmnet-")
            .suffix(".tar.gz")
            .tempfile_in(&self.staging_dir)
            .map_err(|e| Error::staging(NAME, Step::CreateTempFile, e))?;

        staged
            .write_all(archive)
            .map_err(|e| Error::staging(NAME, Step::WriteTempFile, e))?;

        // Bytes already handed to the OS are enough for tar to read them.
        if let Err(e) = staged.flush() {
            log::warn!(
                "Failed to flush staged archive {}: {}",
                staged.path().display(),
                e
            );
        }

        log::debug!(
            "Staged {} bytes at {}",
            archive.len(),
            staged.path().display()
        );
        Ok(staged)
    }
}

impl Artifact for NetworkHelperBundle {
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
        resources: &dyn ResourceProvider,
    ) -> Result<()> {
        let resource = resource_name(self.arch);
        let archive = resources
            .read_bytes(&resource)
            .map_err(|e| Error::resource(NAME, resource.as_str(), e))?;

        let staged = self.stage(&archive)?;

        let dir = parent_dir(&self.path);
        create_dir(NAME, executor, dir)?;

        executor
            .run_interactive(
                "sh",
                &[
                    OsStr::new("-c"),
                    OsStr::new(EXTRACT_SCRIPT),
                    OsStr::new("sh"),
                    dir.as_os_str(),
                    staged.path().as_os_str(),
                ],
            )
            .map_err(|e| Error::privileged(NAME, Step::ExtractArchive, e))?;

        log::debug!("Extracted {} into {}", resource, dir.display());
        Ok(())
    }
}
