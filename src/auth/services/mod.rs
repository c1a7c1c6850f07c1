//! Application services for registration and credential resolution.

mod authentication;

pub use authentication::{AuthService, AuthServiceError, AuthServiceResult};
