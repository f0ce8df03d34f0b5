//! Port for grievance persistence and identifier assignment.

use async_trait::async_trait;

use crate::domain::{Grievance, GrievanceId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by grievance repository adapters.
    pub enum GrievanceRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "grievance repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "grievance repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GrievanceRepository: Send + Sync {
    /// Atomically advance the grievance counter and return the new value.
    ///
    /// Returns 1 when no grievance has been issued and `N + 1` when the
    /// highest issued identifier is `N`. Concurrent callers never observe the
    /// same value. The raw value is returned so callers can validate it.
    ///
    /// The counter has sequence semantics: a value is consumed even if the
    /// following [`GrievanceRepository::insert`] fails, so a failed
    /// submission leaves a gap and stored ids need not be contiguous.
    async fn next_grievance_id(&self) -> Result<i64, GrievanceRepositoryError>;

    /// Persist a new grievance.
    async fn insert(&self, grievance: &Grievance) -> Result<(), GrievanceRepositoryError>;

    /// Find a grievance by its human-facing identifier.
    async fn find_by_grievance_id(
        &self,
        id: GrievanceId,
    ) -> Result<Option<Grievance>, GrievanceRepositoryError>;
}
