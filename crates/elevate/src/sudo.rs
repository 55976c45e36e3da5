//! Sudo-backed executor
//!
//! Sudo is requested per command, never for the whole process. Each call
//! attaches to the controlling terminal so sudo can prompt for a password
//! when its credential cache is cold. Call [`SudoExecutor::validate`] first
//! to get the prompt out of the way before a batch of privileged commands.

use crate::PrivilegedExecutor;
use crate::direct::run_inherited;
use crate::error::Result;
use std::ffi::OsStr;
use std::process::{Command, Stdio};

/// Default elevation program
pub const DEFAULT_PROGRAM: &str = "sudo";

/// Executor that runs every command through `sudo`.
#[derive(Debug, Clone)]
pub struct SudoExecutor {
    program: String,
}

impl SudoExecutor {
    /// Create an executor using `sudo`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Create an executor using a sudo-compatible program (e.g. `doas`).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The elevation program in use.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Validate credentials up front, prompting for a password if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt is declined or the program is missing.
    pub fn validate(&self, reason: &str) -> Result<()> {
        log::info!("{} required: {}", self.program, reason);
        run_inherited(OsStr::new(&self.program), &[OsStr::new("-v")])
    }

    /// Check whether credentials are cached (never prompts).
    pub fn has_cached_credentials(&self) -> bool {
        Command::new(&self.program)
            .args(["-n", "true"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Default for SudoExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivilegedExecutor for SudoExecutor {
    fn run_interactive(&self, program: &str, args: &[&OsStr]) -> Result<()> {
        let mut elevated = Vec::with_capacity(args.len() + 1);
        elevated.push(OsStr::new(program));
        elevated.extend_from_slice(args);

        run_inherited(OsStr::new(&self.program), &elevated)
    }
}
