//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Registered portal accounts.
    users (id) {
        /// Primary key: UUID v4 identifier, never shown to callers.
        id -> Uuid,
        name -> Text,
        /// Normalised (trimmed, lowercased) email; unique.
        email -> Text,
        /// Argon2id PHC string.
        password_hash -> Text,
        role -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Submitted grievances keyed by their sequential public identifier.
    grievances (grievance_id) {
        grievance_id -> Int8,
        grievance_title -> Text,
        grievance_desc -> Text,
        /// Lifecycle status; only `open` is written.
        status -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Named monotonic counters. The `grievance_id` row holds the last
    /// issued grievance identifier.
    grievance_counters (name) {
        name -> Text,
        value -> Int8,
    }
}
