//! Driving port for grievance lookups.

use async_trait::async_trait;

use crate::domain::{Error, GrievanceLookup, GrievanceView};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GrievanceQuery: Send + Sync {
    /// Fetch a grievance by its caller-facing identifier.
    ///
    /// Identifiers that are not positive integers yield `not_found`.
    async fn find_by_external_id(&self, lookup: GrievanceLookup) -> Result<GrievanceView, Error>;
}
