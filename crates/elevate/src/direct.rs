//! Unelevated executor that runs commands as the current user.

use crate::error::{Error, Result};
use crate::{PrivilegedExecutor, command_line};
use std::ffi::OsStr;
use std::process::{Command, Stdio};

/// Runs commands directly, without any privilege elevation.
///
/// Useful when the install layout is owned by the current user, and for
/// exercising real filesystem effects in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectExecutor;

impl DirectExecutor {
    /// Create a new direct executor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PrivilegedExecutor for DirectExecutor {
    fn run_interactive(&self, program: &str, args: &[&OsStr]) -> Result<()> {
        run_inherited(OsStr::new(program), args)
    }
}

/// Run a command with inherited stdio and map its exit status.
pub(crate) fn run_inherited(program: &OsStr, args: &[&OsStr]) -> Result<()> {
    let command = command_line(std::iter::once(program).chain(args.iter().copied()));
    log::debug!("Running: {}", command);

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| Error::Spawn {
            command: command.clone(),
            source,
        })?;

    if !status.success() {
        return Err(Error::Failed {
            command,
            code: status.code(),
        });
    }

    Ok(())
}
