//! Error types for artifact installation.
//!
//! Every error names the artifact and the step that failed, and keeps the
//! underlying cause as its source. Errors are never retried and nothing is
//! rolled back; re-running the install is the recovery path.

use std::fmt;
use std::io;

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Individual step of an artifact's materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Fetching a bundled resource.
    ReadResource,
    /// Creating the staging temp file.
    CreateTempFile,
    /// Writing bytes into the staging temp file.
    WriteTempFile,
    /// Creating the destination directory.
    CreateDirectory,
    /// Writing the destination file.
    WriteFile,
    /// Extracting the staged archive at the destination.
    ExtractArchive,
    /// Creating the destination symlink.
    CreateSymlink,
}

impl Step {
    /// Human-readable description of the step.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::ReadResource => "reading bundled resource",
            Self::CreateTempFile => "creating staging file",
            Self::WriteTempFile => "writing staging file",
            Self::CreateDirectory => "preparing destination directory",
            Self::WriteFile => "writing destination file",
            Self::ExtractArchive => "extracting archive",
            Self::CreateSymlink => "creating symlink",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Coarse error kinds, one per failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A bundled resource was missing or unreadable.
    ResourceUnavailable,
    /// The local staging file could not be created or written.
    StagingFailed,
    /// A privileged command failed or could not be launched.
    PrivilegedOperationFailed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::ResourceUnavailable => "Bundled resource unavailable",
            Self::StagingFailed => "Staging failed",
            Self::PrivilegedOperationFailed => "Privileged operation failed",
        };
        write!(f, "{description}")
    }
}

/// Errors that can occur while installing an artifact.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A bundled resource was missing or unreadable.
    #[error("{artifact}: error retrieving bundled resource {name}: {source}")]
    ResourceUnavailable {
        /// Artifact being installed.
        artifact: &'static str,
        /// Resource name that was requested.
        name: String,
        /// Underlying lookup error.
        #[source]
        source: bundled::Error,
    },

    /// The staging temp file could not be created or written.
    #[error("{artifact}: error {step}: {source}")]
    StagingFailed {
        /// Artifact being installed.
        artifact: &'static str,
        /// Failing step.
        step: Step,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// A privileged command failed or could not be launched.
    #[error("{artifact}: error {step}: {source}")]
    PrivilegedOperationFailed {
        /// Artifact being installed.
        artifact: &'static str,
        /// Failing step.
        step: Step,
        /// Underlying executor error.
        #[source]
        source: elevate::Error,
    },
}

impl Error {
    /// Create a resource error.
    pub fn resource(artifact: &'static str, name: impl Into<String>, source: bundled::Error) -> Self {
        Self::ResourceUnavailable {
            artifact,
            name: name.into(),
            source,
        }
    }

    /// Create a staging error.
    pub fn staging(artifact: &'static str, step: Step, source: io::Error) -> Self {
        Self::StagingFailed {
            artifact,
            step,
            source,
        }
    }

    /// Create a privileged command error.
    pub fn privileged(artifact: &'static str, step: Step, source: elevate::Error) -> Self {
        Self::PrivilegedOperationFailed {
            artifact,
            step,
            source,
        }
    }

    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ResourceUnavailable { .. } => ErrorKind::ResourceUnavailable,
            Error::StagingFailed { .. } => ErrorKind::StagingFailed,
            Error::PrivilegedOperationFailed { .. } => ErrorKind::PrivilegedOperationFailed,
        }
    }

    /// Name of the artifact whose install failed.
    #[must_use]
    pub fn artifact(&self) -> &'static str {
        match self {
            Error::ResourceUnavailable { artifact, .. }
            | Error::StagingFailed { artifact, .. }
            | Error::PrivilegedOperationFailed { artifact, .. } => artifact,
        }
    }

    /// The step that failed.
    #[must_use]
    pub fn step(&self) -> Step {
        match self {
            Error::ResourceUnavailable { .. } => Step::ReadResource,
            Error::StagingFailed { step, .. } | Error::PrivilegedOperationFailed { step, .. } => {
                *step
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_resource_error_accessors() {
        let err = Error::resource(
            "sudoers",
            "network/sudo.txt",
            bundled::Error::not_found("network/sudo.txt"),
        );
        assert_eq!(err.kind(), ErrorKind::ResourceUnavailable);
        assert_eq!(err.artifact(), "sudoers");
        assert_eq!(err.step(), Step::ReadResource);
        assert!(err.to_string().contains("network/sudo.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_staging_error_accessors() {
        let err = Error::staging(
            "vmnet",
            Step::WriteTempFile,
            io::Error::new(io::ErrorKind::StorageFull, "no space left on device"),
        );
        assert_eq!(err.kind(), ErrorKind::StagingFailed);
        assert_eq!(err.step(), Step::WriteTempFile);
        assert_eq!(
            err.to_string(),
            "vmnet: error writing staging file: no space left on device"
        );
    }

    #[test]
    fn test_privileged_error_surfaces_command_failure() {
        let err = Error::privileged(
            "vmnet",
            Step::ExtractArchive,
            elevate::Error::Failed {
                command: "sh -c tar".to_string(),
                code: Some(2),
            },
        );
        assert_eq!(err.kind(), ErrorKind::PrivilegedOperationFailed);
        assert_eq!(err.step(), Step::ExtractArchive);
        let message = err.to_string();
        assert!(message.starts_with("vmnet: error extracting archive"));
        assert!(message.contains("exited with status 2"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(
            ErrorKind::PrivilegedOperationFailed.to_string(),
            "Privileged operation failed"
        );
        assert_eq!(Step::CreateSymlink.to_string(), "creating symlink");
    }
}
