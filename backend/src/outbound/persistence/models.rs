//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{grievances, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
}

/// Row struct for reading from the grievances table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = grievances)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GrievanceRow {
    pub grievance_id: i64,
    pub grievance_title: String,
    pub grievance_desc: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating grievance records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = grievances)]
pub(crate) struct NewGrievanceRow<'a> {
    pub grievance_id: i64,
    pub grievance_title: &'a str,
    pub grievance_desc: &'a str,
    pub status: &'a str,
    pub created_at: DateTime<Utc>,
}
