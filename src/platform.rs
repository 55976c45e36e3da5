//! Architecture selection for bundled network helper payloads.
//!
//! Exactly two payloads are bundled. `x86_64` hosts get the x86_64 bundle
//! and every other architecture gets the arm64 bundle; there is no
//! "unsupported architecture" error.
//!
//! | Identifier | Arch |
//! |------------|------|
//! | `x86_64`   | [`Arch::X86_64`] |
//! | anything else (`aarch64`, `arm64`, ...) | [`Arch::Arm64`] |

use std::fmt;

/// Supported payload architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// 64-bit x86.
    X86_64,
    /// 64-bit ARM.
    Arm64,
}

impl Arch {
    /// Architecture of the running process.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_identifier(std::env::consts::ARCH)
    }

    /// Map an architecture identifier to a payload architecture.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "x86_64" => Self::X86_64,
            "aarch64" | "arm64" => Self::Arm64,
            other => {
                log::warn!(
                    "No network helper bundle for architecture {}, falling back to arm64",
                    other
                );
                Self::Arm64
            }
        }
    }

    /// Suffix used in bundled resource names.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}
