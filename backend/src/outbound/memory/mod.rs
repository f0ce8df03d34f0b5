//! Process-local repositories used when no database is configured.
//!
//! State lives behind a `std::sync::Mutex` and is lost on restart. The lock
//! is never held across an `.await`.

mod grievance_repository;
mod user_repository;

pub use grievance_repository::InMemoryGrievanceRepository;
pub use user_repository::InMemoryUserRepository;

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
