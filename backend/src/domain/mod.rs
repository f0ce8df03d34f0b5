//! Domain primitives, ports and services for the grievance portal.
//!
//! Purpose: define strongly typed entities shared by the HTTP and persistence
//! adapters, the driving/driven port traits between them, and the services
//! implementing the use-cases.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, UserAccount and friends: registered identities.
//! - Grievance, GrievanceId and friends: submitted complaints.
//! - IdentityService, GrievanceService: use-case implementations.

pub mod auth;
pub mod error;
pub mod grievance;
mod grievance_service;
mod identity_service;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{CredentialField, LoginCredentials, MissingField, Registration};
pub use self::error::{Error, ErrorCode};
pub use self::grievance::{
    Grievance, GrievanceId, GrievanceLookup, GrievanceStatus, GrievanceSubmission,
    GrievanceValidationError, GrievanceView, IssueText,
};
pub use self::grievance_service::GrievanceService;
pub use self::identity_service::IdentityService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EmailAddress, PasswordDigest, User, UserAccount, UserId, UserName, UserRole,
    UserValidationError,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::unauthorized("Invalid credentials"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
