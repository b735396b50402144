//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Registered users.
    users (id) {
        id -> Uuid,
        username -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Logged exercises, one row per log entry.
    ///
    /// `seq` records insertion order and breaks ties between exercises on the
    /// same date.
    exercises (id) {
        id -> Uuid,
        seq -> Int8,
        user_id -> Uuid,
        description -> Text,
        duration -> Nullable<Float8>,
        #[sql_name = "date"]
        performed_on -> Date,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(exercises -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(exercises, users);
