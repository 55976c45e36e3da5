//! # bundled
//!
//! Read-only access to resources that ship with a binary.
//!
//! Resources are addressed by stable, `/`-separated names such as
//! `network/sudo.txt`. How the bytes get into the binary is up to the
//! host application; this crate only defines the lookup contract and two
//! providers:
//!
//! - [`StaticResources`]: an in-memory map, typically filled from
//!   `include_bytes!` / `include_str!`
//! - [`DirResources`]: files under a root directory
//!
//! ## Example
//!
//! ```
//! use bundled::{ResourceProvider, StaticResources};
//!
//! let resources = StaticResources::new()
//!     .with("network/sudo.txt", b"%admin ALL=(root) NOPASSWD: /opt/colima/bin/vde_vmnet\n");
//!
//! let text = resources.read_text("network/sudo.txt").unwrap();
//! assert!(text.ends_with('\n'));
//! assert!(resources.read_bytes("network/missing").is_err());
//! ```

#![warn(missing_docs)]

pub mod dir;
pub mod error;
pub mod memory;

pub use dir::DirResources;
pub use error::{Error, Result};
pub use memory::StaticResources;

/// Source of bundled resources.
///
/// Unknown names fail with [`Error::NotFound`].
pub trait ResourceProvider: Send + Sync {
    /// Read the raw bytes of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for unknown names.
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>>;

    /// Read a resource as UTF-8 text, exactly as stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUtf8`] when the bytes are not valid UTF-8.
    fn read_text(&self, name: &str) -> Result<String> {
        let bytes = self.read_bytes(name)?;
        String::from_utf8(bytes).map_err(|source| Error::InvalidUtf8 {
            name: name.to_string(),
            source,
        })
    }
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for &P {
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        (**self).read_bytes(name)
    }

    fn read_text(&self, name: &str) -> Result<String> {
        (**self).read_text(name)
    }
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for Box<P> {
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        (**self).read_bytes(name)
    }

    fn read_text(&self, name: &str) -> Result<String> {
        (**self).read_text(name)
    }
}
