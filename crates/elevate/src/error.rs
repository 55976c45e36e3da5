//! Error types for privileged command execution.

use std::io;

/// Result type alias for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a [`PrivilegedExecutor`](crate::PrivilegedExecutor).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command could not be launched at all.
    #[error("failed to execute `{command}`: {source}")]
    Spawn {
        /// The command line that was attempted.
        command: String,
        /// Underlying launch error.
        #[source]
        source: io::Error,
    },

    /// The command ran but did not exit successfully.
    #[error("`{command}` {}", describe_exit(.code))]
    Failed {
        /// The command line that failed.
        command: String,
        /// Exit code, `None` when the process was terminated by a signal.
        code: Option<i32>,
    },
}

impl Error {
    /// The command line associated with this error.
    pub fn command(&self) -> &str {
        match self {
            Error::Spawn { command, .. } | Error::Failed { command, .. } => command,
        }
    }

    /// Exit code of the failed command, if it ran and exited normally.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::Failed { code, .. } => *code,
            Error::Spawn { .. } => None,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_display_with_code() {
        let err = Error::Failed {
            command: "sudo mkdir -p /opt/colima/bin".to_string(),
            code: Some(1),
        };
        assert_eq!(
            err.to_string(),
            "`sudo mkdir -p /opt/colima/bin` exited with status 1"
        );
        assert_eq!(err.exit_code(), Some(1));
    }

    #[test]
    fn test_failed_display_signal() {
        let err = Error::Failed {
            command: "sudo true".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by a signal"));
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn test_spawn_display_and_command() {
        let err = Error::Spawn {
            command: "doas ln -sfn a b".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.command(), "doas ln -sfn a b");
        assert!(err.to_string().contains("No such file or directory"));
        assert_eq!(err.exit_code(), None);
    }
}
