//! # vmnet-setup
//!
//! Installs the privileged host files a VM network helper needs before it
//! can run with root-level network device access:
//!
//! | Artifact | Default path | Source |
//! |---|---|---|
//! | [`SudoerPolicy`] | `/etc/sudoers.d/colima` | bundled `network/sudo.txt` |
//! | [`NetworkHelperBundle`] | `/opt/colima/bin/vde_vmnet` | bundled `network/vmnet_<arch>.tar.gz` |
//! | [`HelperSymlink`] | `/opt/colima/bin/colima-vmnet` | the running executable |
//!
//! Every privileged mutation goes through an injected
//! [`elevate::PrivilegedExecutor`]; bundled payloads come from an injected
//! [`bundled::ResourceProvider`]. Nothing is downloaded.
//!
//! ## Example
//!
//! ```no_run
//! use bundled::DirResources;
//! use elevate::SudoExecutor;
//! use vmnet_setup::{artifact, HostEnv, Installer, Layout};
//!
//! let installer = Installer::new(SudoExecutor::new(), DirResources::new("/usr/share/colima"));
//! let artifacts = artifact::all(&Layout::default(), &HostEnv::current());
//!
//! let summary = installer.ensure_all(&artifacts)?;
//! if summary.changed() {
//!     println!("installed: {}", summary.installed.join(", "));
//! }
//! # Ok::<(), vmnet_setup::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! Everything is synchronous. Privileged commands attach to the terminal
//! and may block indefinitely on a password prompt. Installs of the same
//! artifact must not run concurrently; nothing here locks.

#![warn(missing_docs)]

pub mod artifact;
pub mod error;
pub mod host;
pub mod installer;
pub mod layout;
pub mod platform;

pub use artifact::{Artifact, BoxedArtifact, HelperSymlink, NetworkHelperBundle, SudoerPolicy};
pub use error::{Error, ErrorKind, Result, Step};
pub use host::HostEnv;
pub use installer::{InstallOutcome, InstallSummary, Installer, is_installed};
pub use layout::Layout;
pub use platform::Arch;
