//! Installable artifacts
//!
//! Each artifact is a privileged file the VM network helper depends on:
//! - [`SudoerPolicy`]: sudoers drop-in allowing the helper to run as root
//! - [`NetworkHelperBundle`]: architecture specific `vde_vmnet` bundle
//! - [`HelperSymlink`]: link from the install root to the running executable
//!
//! Artifacts are plain values describing a target path. They never touch
//! root-owned paths themselves; everything goes through the injected
//! [`PrivilegedExecutor`].

use crate::error::{Error, Result, Step};
use crate::host::HostEnv;
use crate::layout::Layout;
use bundled::ResourceProvider;
use elevate::PrivilegedExecutor;
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

pub mod symlink;
pub mod sudoers;
pub mod vmnet;

pub use sudoers::SudoerPolicy;
pub use symlink::HelperSymlink;
pub use vmnet::NetworkHelperBundle;

/// A privileged file that can be checked and installed.
pub trait Artifact: Send + Sync + fmt::Debug {
    /// Stable identifier used in logs and errors (e.g. "sudoers", "vmnet").
    fn name(&self) -> &'static str;

    /// Absolute path of the installed file.
    fn path(&self) -> &Path;

    /// Whether the installed file must carry an execute bit.
    fn executable(&self) -> bool;

    /// Produce the artifact's on-disk state via privileged operations.
    ///
    /// Safe to call when the artifact is already installed: every variant
    /// fully overwrites its target.
    fn materialize(
        &self,
        executor: &dyn PrivilegedExecutor,
        resources: &dyn ResourceProvider,
    ) -> Result<()>;
}

/// A boxed artifact for type-erased iteration
pub type BoxedArtifact = Box<dyn Artifact>;

/// All artifacts, in install order.
///
/// The bundle comes before the symlink since it creates the shared binary
/// directory.
pub fn all(layout: &Layout, host: &HostEnv) -> Vec<BoxedArtifact> {
    vec![
        Box::new(SudoerPolicy::new(layout)),
        Box::new(NetworkHelperBundle::new(layout, host)),
        Box::new(HelperSymlink::new(layout, host)),
    ]
}

/// Directory an artifact lives in.
pub(crate) fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new("/"))
}

/// Privileged `mkdir -p`; succeeds whether or not `dir` exists.
pub(crate) fn create_dir(
    artifact: &'static str,
    executor: &dyn PrivilegedExecutor,
    dir: &Path,
) -> Result<()> {
    executor
        .run_interactive("mkdir", &[OsStr::new("-p"), dir.as_os_str()])
        .map_err(|e| Error::privileged(artifact, Step::CreateDirectory, e))
}
