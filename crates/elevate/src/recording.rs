//! Recording executor for testing without elevation.
//!
//! ```
//! use elevate::{PrivilegedExecutor, RecordingExecutor};
//! use std::ffi::OsStr;
//!
//! let recorder = RecordingExecutor::new();
//! recorder.run_interactive("mkdir", &[OsStr::new("-p"), OsStr::new("/opt/colima/bin")]).unwrap();
//!
//! let calls = recorder.invocations();
//! assert_eq!(calls[0].program, "mkdir");
//! assert_eq!(calls[0].args, ["-p", "/opt/colima/bin"]);
//! ```

use crate::PrivilegedExecutor;
use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// A single recorded command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program that was requested.
    pub program: String,
    /// Arguments, lossily converted to UTF-8.
    pub args: Vec<String>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Executor that records every invocation instead of running it.
///
/// Clones share the same log, so a clone can be handed to the code under
/// test while the original is kept for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    calls: Arc<Mutex<Vec<Invocation>>>,
    fail_at: Option<usize>,
}

impl RecordingExecutor {
    /// Create an executor where every command succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor that fails the `index`-th call (zero based).
    ///
    /// The failing call is still recorded.
    #[must_use]
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    /// All invocations recorded so far.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forget recorded invocations.
    pub fn clear(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl PrivilegedExecutor for RecordingExecutor {
    fn run_interactive(&self, program: &str, args: &[&OsStr]) -> Result<()> {
        let invocation = Invocation {
            program: program.to_string(),
            args: args
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        };

        let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        let index = calls.len();
        let command = invocation.to_string();
        calls.push(invocation);

        if self.fail_at == Some(index) {
            return Err(Error::Failed {
                command,
                code: Some(1),
            });
        }

        Ok(())
    }
}
