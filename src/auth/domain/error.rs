//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The username exceeds the 255-character storage limit.
    #[error("username exceeds 255 character limit: {0}")]
    UsernameTooLong(String),

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,
}
