//! Validated credential values and the registration record.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum username length, matching the `VARCHAR(255)` column.
const MAX_USERNAME_LENGTH: usize = 255;

/// Unique, immutable login name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a validated username.
    ///
    /// The input is trimmed; case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyUsername`] when the value is empty
    /// after trimming, or [`UserDomainError::UsernameTooLong`] when it
    /// exceeds 255 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(UserDomainError::EmptyUsername);
        }
        if normalized.chars().count() > MAX_USERNAME_LENGTH {
            return Err(UserDomainError::UsernameTooLong(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the username as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Plaintext password supplied by a caller. Never persisted or logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps a plaintext password. Whitespace is significant.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyPassword`] for an empty value.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(UserDomainError::EmptyPassword);
        }
        Ok(Self(raw))
    }

    /// Returns the plaintext for hashing.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Per-user random salt mixed into the password digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PasswordSalt(String);

impl PasswordSalt {
    /// Generates a fresh random salt (32 lowercase hex characters).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Wraps a persisted salt.
    #[must_use]
    pub fn from_persisted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the salt as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Hex-encoded one-way password digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Hex-encodes raw digest bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Wraps a persisted, already encoded digest.
    #[must_use]
    pub fn from_persisted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the encoded digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Registration record handed to the user store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: Username,
    salt: PasswordSalt,
    digest: PasswordDigest,
}

impl NewUser {
    /// Bundles the values persisted for a new user.
    #[must_use]
    pub const fn new(username: Username, salt: PasswordSalt, digest: PasswordDigest) -> Self {
        Self {
            username,
            salt,
            digest,
        }
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the salt.
    #[must_use]
    pub const fn salt(&self) -> &PasswordSalt {
        &self.salt
    }

    /// Returns the password digest.
    #[must_use]
    pub const fn digest(&self) -> &PasswordDigest {
        &self.digest
    }
}
