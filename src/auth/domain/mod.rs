//! Domain model for users and their credentials.
//!
//! Users are created once at registration and only read afterwards. The
//! plaintext password never leaves [`Password`]; stores only see the salt and
//! the derived digest.

mod credentials;
mod error;
mod ids;

pub use credentials::{NewUser, Password, PasswordDigest, PasswordSalt, Username};
pub use error::UserDomainError;
pub use ids::UserId;
