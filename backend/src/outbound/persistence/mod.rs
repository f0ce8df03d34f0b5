//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories here only translate between Diesel rows and domain types.
//! Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module; all failures are mapped to the port error enums.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselGrievanceRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/grievances")).await?;
//! let repo = DieselGrievanceRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_grievance_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_grievance_repository::DieselGrievanceRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
