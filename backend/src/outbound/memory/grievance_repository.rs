//! In-memory `GrievanceRepository`.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{GrievanceRepository, GrievanceRepositoryError};
use crate::domain::{Grievance, GrievanceId};

use super::lock;

#[derive(Debug, Default)]
struct State {
    last_issued: i64,
    grievances: BTreeMap<GrievanceId, Grievance>,
}

/// Grievances ordered by identifier, with a mutex-guarded counter.
#[derive(Debug, Default)]
pub struct InMemoryGrievanceRepository {
    state: Mutex<State>,
}

impl InMemoryGrievanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing grievances; numbering continues after the
    /// highest identifier.
    pub fn with_grievances(grievances: impl IntoIterator<Item = Grievance>) -> Self {
        let grievances: BTreeMap<_, _> = grievances.into_iter().map(|g| (g.id, g)).collect();
        let last_issued = grievances.keys().next_back().map_or(0, |id| id.value());
        Self {
            state: Mutex::new(State {
                last_issued,
                grievances,
            }),
        }
    }
}

#[async_trait]
impl GrievanceRepository for InMemoryGrievanceRepository {
    async fn next_grievance_id(&self) -> Result<i64, GrievanceRepositoryError> {
        let mut state = lock(&self.state);
        let highest_stored = state
            .grievances
            .keys()
            .next_back()
            .map_or(0, |id| id.value());
        let next = state
            .last_issued
            .max(highest_stored)
            .checked_add(1)
            .ok_or_else(|| GrievanceRepositoryError::query("grievance counter overflow"))?;
        state.last_issued = next;
        Ok(next)
    }

    async fn insert(&self, grievance: &Grievance) -> Result<(), GrievanceRepositoryError> {
        let mut state = lock(&self.state);
        if state.grievances.contains_key(&grievance.id) {
            return Err(GrievanceRepositoryError::query(format!(
                "grievance {} already exists",
                grievance.id
            )));
        }
        state.grievances.insert(grievance.id, grievance.clone());
        Ok(())
    }

    async fn find_by_grievance_id(
        &self,
        id: GrievanceId,
    ) -> Result<Option<Grievance>, GrievanceRepositoryError> {
        Ok(lock(&self.state).grievances.get(&id).cloned())
    }
}
