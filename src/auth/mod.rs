//! User registration and credential resolution.
//!
//! Registration stores a salted, keyed digest of the password; resolution
//! recomputes the digest and matches it inside the store lookup. The
//! resolved [`domain::UserId`] is the owner identity for task operations.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
