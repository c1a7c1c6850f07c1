//! Diesel schema for task persistence.

diesel::table! {
    /// Task records scoped to an owning user.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Owning user identifier.
        user_id -> Int8,
        /// Task display name.
        #[max_length = 255]
        name -> Varchar,
        /// Lifecycle status (`START` or `END`).
        #[max_length = 8]
        status_end -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp, maintained by trigger.
        updated_at -> Timestamptz,
        /// Completion timestamp, maintained by trigger.
        end_task_at -> Nullable<Timestamptz>,
    }
}
