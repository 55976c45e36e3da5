//! Installer - converges privileged artifacts toward their expected layout
//!
//! The installer never tracks state in memory. Each call probes the
//! filesystem with a cheap unprivileged stat and only reaches for the
//! privileged executor when work is needed.

use crate::artifact::{Artifact, BoxedArtifact};
use crate::error::Result;
use bundled::ResourceProvider;
use elevate::PrivilegedExecutor;
use std::fs;

/// Result of [`Installer::ensure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The artifact was already in place; nothing ran.
    AlreadyInstalled,
    /// The artifact was materialized.
    Installed,
}

/// Summary of [`Installer::ensure_all`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallSummary {
    /// Artifacts that were materialized, in order.
    pub installed: Vec<&'static str>,
    /// Artifacts that were already in place.
    pub already_installed: Vec<&'static str>,
}

impl InstallSummary {
    /// Whether any privileged work was performed.
    pub fn changed(&self) -> bool {
        !self.installed.is_empty()
    }

    fn record(&mut self, name: &'static str, outcome: InstallOutcome) {
        match outcome {
            InstallOutcome::AlreadyInstalled => self.already_installed.push(name),
            InstallOutcome::Installed => self.installed.push(name),
        }
    }
}

/// Checks and installs artifacts through injected collaborators.
pub struct Installer {
    executor: Box<dyn PrivilegedExecutor>,
    resources: Box<dyn ResourceProvider>,
}

impl Installer {
    /// Create an installer.
    pub fn new(
        executor: impl PrivilegedExecutor + 'static,
        resources: impl ResourceProvider + 'static,
    ) -> Self {
        Self {
            executor: Box::new(executor),
            resources: Box::new(resources),
        }
    }

    /// Whether `artifact` is already installed.
    ///
    /// Never fails: any stat error means "not installed". Executable
    /// artifacts additionally need at least one execute bit.
    pub fn is_installed(&self, artifact: &dyn Artifact) -> bool {
        is_installed(artifact)
    }

    /// Materialize `artifact` unconditionally.
    ///
    /// Safe on an installed artifact; every variant overwrites its target.
    pub fn install(&self, artifact: &dyn Artifact) -> Result<()> {
        log::info!(
            "Installing {} at {}",
            artifact.name(),
            artifact.path().display()
        );
        artifact.materialize(self.executor.as_ref(), self.resources.as_ref())
    }

    /// Install `artifact` unless it is already installed.
    pub fn ensure(&self, artifact: &dyn Artifact) -> Result<InstallOutcome> {
        if self.is_installed(artifact) {
            log::debug!("{} already installed", artifact.name());
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        self.install(artifact)?;
        Ok(InstallOutcome::Installed)
    }

    /// Ensure every artifact in order, stopping at the first failure.
    ///
    /// Artifacts installed before a failure stay installed.
    pub fn ensure_all(&self, artifacts: &[BoxedArtifact]) -> Result<InstallSummary> {
        let mut summary = InstallSummary::default();

        for artifact in artifacts {
            let outcome = self.ensure(artifact.as_ref())?;
            summary.record(artifact.name(), outcome);
        }

        Ok(summary)
    }
}

/// Stat-based idempotency check shared by [`Installer::is_installed`].
pub fn is_installed(artifact: &dyn Artifact) -> bool {
    let metadata = match fs::metadata(artifact.path()) {
        Ok(metadata) => metadata,
        Err(err) => {
            log::debug!("{} not installed: {}", artifact.path().display(), err);
            return false;
        }
    };

    if !artifact.executable() {
        return true;
    }

    has_execute_bit(&metadata)
}

#[cfg(unix)]
fn has_execute_bit(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_execute_bit(_metadata: &fs::Metadata) -> bool {
    true
}
