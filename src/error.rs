//! Transport-facing classification of service errors.

use std::fmt;

/// Coarse error class a transport layer maps to a user-visible status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input; the caller can correct it (bad-request class).
    Validation,
    /// The record does not exist for the caller (not-found class).
    NotFound,
    /// The store failed (internal-error class).
    Store,
}

impl ErrorKind {
    /// Returns a stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Store => "store",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
