//! Keyed, iterated SHA-256 password hasher.

use crate::auth::{
    domain::{Password, PasswordDigest, PasswordSalt},
    ports::PasswordHasher,
};
use crate::config::AuthConfig;
use sha2::{Digest, Sha256};
use std::fmt;

/// Default number of hashing rounds.
pub const DEFAULT_ROUNDS: u32 = 10_000;

/// SHA-256 hasher keyed with a server-side secret.
///
/// The first round digests `secret || salt || password`; every further
/// round digests `secret || previous`. SHA-256 is not memory-hard, so this
/// slows offline guessing down without stopping it.
#[derive(Clone)]
pub struct Sha256PasswordHasher {
    secret: Vec<u8>,
    rounds: u32,
}

impl Sha256PasswordHasher {
    /// Creates a hasher; `rounds` below one is raised to one.
    #[must_use]
    pub fn new(secret: impl Into<String>, rounds: u32) -> Self {
        Self {
            secret: secret.into().into_bytes(),
            rounds: rounds.max(1),
        }
    }

    /// Creates a hasher from authentication settings.
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.password_secret.clone(), config.hash_rounds)
    }

    /// Returns the configured number of rounds.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }
}

impl fmt::Debug for Sha256PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256PasswordHasher")
            .field("secret", &"<redacted>")
            .field("rounds", &self.rounds)
            .finish()
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, password: &Password, salt: &PasswordSalt) -> PasswordDigest {
        let mut digest = Sha256::new()
            .chain_update(&self.secret)
            .chain_update(salt.as_str())
            .chain_update(password.expose())
            .finalize();
        for _ in 1..self.rounds {
            digest = Sha256::new()
                .chain_update(&self.secret)
                .chain_update(digest)
                .finalize();
        }
        PasswordDigest::from_bytes(&digest)
    }
}
