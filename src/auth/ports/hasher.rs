//! Port for one-way password hashing.

use crate::auth::domain::{Password, PasswordDigest, PasswordSalt};

/// Deterministic one-way transform of a password into a storable digest.
///
/// The same password and salt must always produce the same digest, since
/// authentication compares digests inside the store lookup. No inverse is
/// exposed.
pub trait PasswordHasher: Send + Sync {
    /// Derives the digest of `password` under `salt`.
    fn hash(&self, password: &Password, salt: &PasswordSalt) -> PasswordDigest;
}
