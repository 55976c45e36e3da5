//! Error types for bundled resource lookups.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Result type alias for resource operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a bundled resource.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No resource is bundled under this name.
    #[error("resource not found: {name}")]
    NotFound {
        /// Requested resource name.
        name: String,
    },

    /// The resource exists but is not valid UTF-8 text.
    #[error("resource {name} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        /// Requested resource name.
        name: String,
        /// Underlying decoding error.
        #[source]
        source: FromUtf8Error,
    },

    /// Reading the backing file failed.
    #[error("failed to read resource {name} from {path}: {source}")]
    Io {
        /// Requested resource name.
        name: String,
        /// File that backs the resource.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Create a not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// The resource name this error refers to.
    pub fn name(&self) -> &str {
        match self {
            Error::NotFound { name } | Error::InvalidUtf8 { name, .. } | Error::Io { name, .. } => {
                name
            }
        }
    }

    /// Whether the resource simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_constructor() {
        let err = Error::not_found("network/sudo.txt");
        assert!(err.is_not_found());
        assert_eq!(err.name(), "network/sudo.txt");
        assert_eq!(err.to_string(), "resource not found: network/sudo.txt");
    }

    #[test]
    fn test_io_error_is_not_not_found() {
        let err = Error::Io {
            name: "network/sudo.txt".to_string(),
            path: PathBuf::from("/srv/bundle/network/sudo.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("/srv/bundle/network/sudo.txt"));
    }
}
