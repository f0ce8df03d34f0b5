//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{GrievanceCommand, GrievanceQuery, LoginService, RegistrationService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn RegistrationService>,
    pub login: Arc<dyn LoginService>,
    pub grievances: Arc<dyn GrievanceCommand>,
    pub grievance_query: Arc<dyn GrievanceQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{GrievanceService, IdentityService};
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::crypto::Argon2PasswordHasher;
    /// use backend::outbound::memory::{InMemoryGrievanceRepository, InMemoryUserRepository};
    /// use mockable::DefaultClock;
    ///
    /// let identity = Arc::new(IdentityService::new(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(Argon2PasswordHasher::new()),
    /// ));
    /// let grievances = Arc::new(GrievanceService::new(
    ///     Arc::new(InMemoryGrievanceRepository::new()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(identity.clone(), identity, grievances.clone(), grievances);
    /// let _ = state.login.clone();
    /// ```
    pub fn new(
        registration: Arc<dyn RegistrationService>,
        login: Arc<dyn LoginService>,
        grievances: Arc<dyn GrievanceCommand>,
        grievance_query: Arc<dyn GrievanceQuery>,
    ) -> Self {
        Self {
            registration,
            login,
            grievances,
            grievance_query,
        }
    }
}
