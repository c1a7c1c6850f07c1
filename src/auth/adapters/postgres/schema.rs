//! Diesel schema for user persistence.

diesel::table! {
    /// Registered users and their password digests.
    users (id) {
        /// Store-assigned user identifier.
        id -> Int8,
        /// Unique login name.
        #[max_length = 255]
        username -> Varchar,
        /// Per-user random salt.
        #[max_length = 64]
        password_salt -> Varchar,
        /// Hex-encoded password digest.
        #[max_length = 255]
        password_hash -> Varchar,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
