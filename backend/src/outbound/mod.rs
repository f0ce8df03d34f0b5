//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: process-local repositories for database-less runs
//! - **crypto**: Argon2id password hashing
//!
//! Adapters translate between domain types and infrastructure
//! representations and contain no business logic.

pub mod crypto;
pub mod memory;
pub mod persistence;
