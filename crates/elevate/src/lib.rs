//! # elevate
//!
//! Run commands with elevated privileges behind an injectable trait.
//!
//! Privileged work is never performed directly by callers. Instead they
//! receive a [`PrivilegedExecutor`] and ask it to run commands. This keeps
//! code that mutates root-owned paths testable without invoking real
//! elevation tooling.
//!
//! ## Executors
//!
//! | Executor | Behaviour |
//! |---|---|
//! | [`SudoExecutor`] | Prefixes every command with `sudo` and attaches to the terminal for password prompts |
//! | [`DirectExecutor`] | Runs commands as the current user |
//! | [`RecordingExecutor`] | Records invocations without running anything |
//!
//! ## Example
//!
//! ```no_run
//! use elevate::{PrivilegedExecutor, SudoExecutor};
//! use std::ffi::OsStr;
//!
//! let sudo = SudoExecutor::new();
//! sudo.run_interactive("mkdir", &[OsStr::new("-p"), OsStr::new("/opt/colima/bin")])
//!     .expect("mkdir failed");
//! ```

#![warn(missing_docs)]

pub mod direct;
pub mod error;
pub mod recording;
pub mod sudo;

pub use direct::DirectExecutor;
pub use error::{Error, Result};
pub use recording::{Invocation, RecordingExecutor};
pub use sudo::SudoExecutor;

use std::ffi::OsStr;

/// Provider for elevated privilege operations.
///
/// Implementations run `program` with `args` interactively: stdin, stdout
/// and stderr stay attached to the terminal so credential prompts work, and
/// no output is captured. Calls may block indefinitely.
pub trait PrivilegedExecutor: Send + Sync {
    /// Run a command with elevated privileges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Spawn`] if the command cannot be launched and
    /// [`Error::Failed`] if it exits unsuccessfully.
    fn run_interactive(&self, program: &str, args: &[&OsStr]) -> Result<()>;
}

impl<E: PrivilegedExecutor + ?Sized> PrivilegedExecutor for &E {
    fn run_interactive(&self, program: &str, args: &[&OsStr]) -> Result<()> {
        (**self).run_interactive(program, args)
    }
}

impl<E: PrivilegedExecutor + ?Sized> PrivilegedExecutor for Box<E> {
    fn run_interactive(&self, program: &str, args: &[&OsStr]) -> Result<()> {
        (**self).run_interactive(program, args)
    }
}

/// Render a command line for logs and error messages.
pub(crate) fn command_line<'a>(parts: impl IntoIterator<Item = &'a OsStr>) -> String {
    parts
        .into_iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
