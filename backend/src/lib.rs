//! Grievance portal backend.
//!
//! - [`domain`]: entities, ports and the identity and grievance services.
//! - [`inbound`]: Actix handlers, sessions and HTML views.
//! - [`outbound`]: PostgreSQL, in-memory and Argon2 adapters.
//! - [`middleware`]: request tracing.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
