//! Error types for Astrolabe operations.
//!
//! Clipboard operations never fail: elements that cannot be carried over are
//! left out and reported through the log as an [`Omission`]. The
//! [`AstrolabeError`] type covers the fallible edges of the crate, i.e.
//! loading configuration.

use std::{fmt, io};

use thiserror::Error;

/// The main error type for Astrolabe operations.
#[derive(Debug, Error)]
pub enum AstrolabeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why capture or paste left an element out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Omission {
    /// An edge endpoint was not among the copied nodes.
    MissingEndpoint,
    /// The destination graph admits no element of this kind.
    IncompatibleKind,
    /// Both endpoints are calls, so the edge is stored without `connect`
    /// to avoid creating a second nested call.
    DuplicateCallConnect,
}

impl fmt::Display for Omission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MissingEndpoint => "missing endpoint",
            Self::IncompatibleKind => "incompatible kind",
            Self::DuplicateCallConnect => "duplicate call connect",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let err: AstrolabeError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AstrolabeError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn test_omission_display() {
        assert_eq!(Omission::MissingEndpoint.to_string(), "missing endpoint");
        assert_eq!(Omission::IncompatibleKind.to_string(), "incompatible kind");
    }
}
