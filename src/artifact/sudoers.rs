//! Sudoers drop-in that lets the network helper run as root.

use super::{Artifact, create_dir, parent_dir};
use crate::error::{Error, Result, Step};
use crate::layout::Layout;
use bundled::ResourceProvider;
use elevate::PrivilegedExecutor;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Bundled policy text.
pub const RESOURCE: &str = "network/sudo.txt";

const NAME: &str = "sudoers";

// The policy is passed as a positional argument so it reaches the file
// byte for byte, with no shell quoting or added newline.
const WRITE_SCRIPT: &str = r#"printf '%s' "$1" > "$2""#;

/// Sudoers policy fragment under the sudo drop-in directory.
#[derive(Debug, Clone)]
pub struct SudoerPolicy {
    path: PathBuf,
}

impl SudoerPolicy {
    /// Policy file location for `layout`.
    pub fn new(layout: &Layout) -> Self {
        Self {
            path: layout.sudoers_path(),
        }
    }
}

impl Artifact for SudoerPolicy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn executable(&self) -> bool {
        false
    }

    fn materialize(
        &self,
        executor: &dyn PrivilegedExecutor,
        resources: &dyn ResourceProvider,
    ) -> Result<()> {
        let policy = resources
            .read_text(RESOURCE)
            .map_err(|e| Error::resource(NAME, RESOURCE, e))?;

        create_dir(NAME, executor, parent_dir(&self.path))?;

        executor
            .run_interactive(
                "sh",
                &[
                    OsStr::new("-c"),
                    OsStr::new(WRITE_SCRIPT),
                    OsStr::new("sh"),
                    OsStr::new(&policy),
                    self.path.as_os_str(),
                ],
            )
            .map_err(|e| Error::privileged(NAME, Step::WriteFile, e))?;

        log::debug!("Wrote sudoers policy to {}", self.path.display());
        Ok(())
    }
}
