//! Diesel row models for user persistence.

use super::schema::users;
use diesel::prelude::*;

/// Insert model for user records; `id` and `created_at` use defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Unique login name.
    pub username: String,
    /// Per-user salt.
    pub password_salt: String,
    /// Password digest.
    pub password_hash: String,
}
