//! Grievance domain service.
//!
//! Implements submission and lookup driving ports. Identifier assignment is
//! delegated to the repository's atomic counter; the service only checks that
//! the value it receives is a usable identifier.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info};

use crate::domain::ports::{
    GrievanceCommand, GrievanceQuery, GrievanceRepository, GrievanceRepositoryError,
};
use crate::domain::{
    Error, Grievance, GrievanceId, GrievanceLookup, GrievanceSubmission, GrievanceView,
};

const NOT_FOUND: &str = "Grievance not found";

fn map_repository_error(error: GrievanceRepositoryError) -> Error {
    match error {
        GrievanceRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("grievance repository unavailable: {message}"))
        }
        GrievanceRepositoryError::Query { message } => {
            Error::internal(format!("grievance repository error: {message}"))
        }
    }
}

/// Grievance service implementing both the command and query ports.
#[derive(Clone)]
pub struct GrievanceService<R> {
    grievances: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> GrievanceService<R> {
    pub fn new(grievances: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { grievances, clock }
    }
}

#[async_trait]
impl<R> GrievanceCommand for GrievanceService<R>
where
    R: GrievanceRepository,
{
    async fn submit(&self, submission: GrievanceSubmission) -> Result<GrievanceId, Error> {
        let GrievanceSubmission {
            submitter_name,
            submitter_email,
            issue,
        } = submission;

        let issued = self
            .grievances
            .next_grievance_id()
            .await
            .map_err(map_repository_error)?;
        let id = GrievanceId::new(issued).map_err(|err| {
            error!(issued, error = %err, "grievance counter returned an unusable value");
            Error::internal("failed to generate a valid grievance ID")
        })?;

        let grievance = Grievance::open(id, issue, self.clock.utc());
        self.grievances
            .insert(&grievance)
            .await
            .map_err(map_repository_error)?;

        info!(
            grievance_id = %id,
            submitter_name = submitter_name.as_deref().unwrap_or_default(),
            submitter_email = submitter_email.as_deref().unwrap_or_default(),
            "grievance submitted"
        );
        Ok(id)
    }
}

#[async_trait]
impl<R> GrievanceQuery for GrievanceService<R>
where
    R: GrievanceRepository,
{
    async fn find_by_external_id(&self, lookup: GrievanceLookup) -> Result<GrievanceView, Error> {
        let GrievanceLookup {
            grievance_id,
            viewer_id,
        } = lookup;

        // An id that is not a positive integer was never issued.
        let Ok(id) = GrievanceId::parse(&grievance_id) else {
            return Err(Error::not_found(NOT_FOUND));
        };

        let grievance = self
            .grievances
            .find_by_grievance_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(NOT_FOUND))?;

        Ok(GrievanceView {
            grievance,
            viewer_id,
        })
    }
}

#[cfg(test)]
#[path = "grievance_service_tests.rs"]
mod tests;
