//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod grievance_command;
mod grievance_query;
mod grievance_repository;
mod login_service;
mod password_hasher;
mod registration_service;
mod user_repository;

#[cfg(test)]
pub use grievance_command::MockGrievanceCommand;
pub use grievance_command::GrievanceCommand;
#[cfg(test)]
pub use grievance_query::MockGrievanceQuery;
pub use grievance_query::GrievanceQuery;
#[cfg(test)]
pub use grievance_repository::MockGrievanceRepository;
pub use grievance_repository::{GrievanceRepository, GrievanceRepositoryError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::RegistrationService;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
