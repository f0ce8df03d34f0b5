//! Driving port for grievance submission.

use async_trait::async_trait;

use crate::domain::{Error, GrievanceId, GrievanceSubmission};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GrievanceCommand: Send + Sync {
    /// Open a grievance and return its newly assigned identifier.
    async fn submit(&self, submission: GrievanceSubmission) -> Result<GrievanceId, Error>;
}
