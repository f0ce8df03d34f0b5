//! Builders wiring repositories and services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use backend::domain::ports::{GrievanceRepository, PasswordHasher, UserRepository};
use backend::domain::{GrievanceService, IdentityService};
use backend::inbound::http::state::HttpState;
use backend::outbound::crypto::Argon2PasswordHasher;
use backend::outbound::memory::{InMemoryGrievanceRepository, InMemoryUserRepository};
use backend::outbound::persistence::{DieselGrievanceRepository, DieselUserRepository};

use super::ServerConfig;

/// Compose the identity and grievance services over the given adapters.
pub(super) fn http_state_from_adapters<U, G, H>(
    users: Arc<U>,
    grievances: Arc<G>,
    hasher: Arc<H>,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    U: UserRepository + 'static,
    G: GrievanceRepository + 'static,
    H: PasswordHasher + 'static,
{
    let identity = Arc::new(IdentityService::new(users, hasher));
    let grievance_service = Arc::new(GrievanceService::new(grievances, clock));
    HttpState::new(
        identity.clone(),
        identity,
        grievance_service.clone(),
        grievance_service,
    )
}

/// Build the shared HTTP state, backed by PostgreSQL when a pool is
/// configured and by process memory otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let hasher = Arc::new(Argon2PasswordHasher::new());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    let state = match &config.db_pool {
        Some(pool) => http_state_from_adapters(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselGrievanceRepository::new(pool.clone())),
            hasher,
            clock,
        ),
        None => http_state_from_adapters(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryGrievanceRepository::new()),
            hasher,
            clock,
        ),
    };
    web::Data::new(state)
}
