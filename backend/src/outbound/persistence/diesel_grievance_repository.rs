//! PostgreSQL-backed `GrievanceRepository` implementation using Diesel ORM.
//!
//! Identifier assignment uses the `grievance_counters` row: a single
//! `INSERT .. ON CONFLICT DO UPDATE .. RETURNING` statement increments and
//! reads it atomically, so concurrent submitters never share an id.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{GrievanceRepository, GrievanceRepositoryError};
use crate::domain::{Grievance, GrievanceId, GrievanceStatus};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{GrievanceRow, NewGrievanceRow};
use super::pool::DbPool;
use super::schema::{grievance_counters, grievances};

/// Name of the counter row that tracks issued grievance identifiers.
pub(crate) const GRIEVANCE_COUNTER: &str = "grievance_id";

/// Diesel-backed implementation of the grievance repository port.
#[derive(Clone)]
pub struct DieselGrievanceRepository {
    pool: DbPool,
}

impl DieselGrievanceRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> GrievanceRepositoryError {
    map_diesel_error(
        error,
        GrievanceRepositoryError::query,
        GrievanceRepositoryError::connection,
    )
}

fn row_to_grievance(row: GrievanceRow) -> Result<Grievance, GrievanceRepositoryError> {
    let GrievanceRow {
        grievance_id,
        grievance_title,
        grievance_desc,
        status,
        created_at,
    } = row;

    let id = GrievanceId::new(grievance_id)
        .map_err(|err| GrievanceRepositoryError::query(err.to_string()))?;
    let status = GrievanceStatus::parse(&status)
        .map_err(|err| GrievanceRepositoryError::query(err.to_string()))?;

    Ok(Grievance {
        id,
        title: grievance_title,
        description: grievance_desc,
        status,
        created_at,
    })
}

#[async_trait]
impl GrievanceRepository for DieselGrievanceRepository {
    async fn next_grievance_id(&self) -> Result<i64, GrievanceRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, GrievanceRepositoryError::connection))?;

        diesel::insert_into(grievance_counters::table)
            .values((
                grievance_counters::name.eq(GRIEVANCE_COUNTER),
                grievance_counters::value.eq(1_i64),
            ))
            .on_conflict(grievance_counters::name)
            .do_update()
            .set(grievance_counters::value.eq(grievance_counters::value + 1_i64))
            .returning(grievance_counters::value)
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_error)
    }

    async fn insert(&self, grievance: &Grievance) -> Result<(), GrievanceRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, GrievanceRepositoryError::connection))?;

        let row = NewGrievanceRow {
            grievance_id: grievance.id.value(),
            grievance_title: &grievance.title,
            grievance_desc: &grievance.description,
            status: grievance.status.as_str(),
            created_at: grievance.created_at,
        };

        diesel::insert_into(grievances::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_error)
    }

    async fn find_by_grievance_id(
        &self,
        id: GrievanceId,
    ) -> Result<Option<Grievance>, GrievanceRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, GrievanceRepositoryError::connection))?;

        let row = grievances::table
            .filter(grievances::grievance_id.eq(id.value()))
            .select(GrievanceRow::as_select())
            .first::<GrievanceRow>(&mut conn)
            .await
            .optional()
            .map_err(map_error)?;

        row.map(row_to_grievance).transpose()
    }
}
