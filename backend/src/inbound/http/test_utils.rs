//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use async_trait::async_trait;
use mockable::DefaultClock;

use crate::domain::ports::{PasswordHashError, PasswordHasher};
use crate::domain::{GrievanceService, IdentityService, PasswordDigest};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryGrievanceRepository, InMemoryUserRepository};

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Reversible stand-in for Argon2 so handler tests stay fast.
pub struct StubHasher;

const STUB_PREFIX: &str = "stub$";

#[async_trait]
impl PasswordHasher for StubHasher {
    async fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordHashError> {
        PasswordDigest::new(format!("{STUB_PREFIX}{password}"))
            .map_err(|err| PasswordHashError::hashing(err.to_string()))
    }

    async fn verify(
        &self,
        password: &str,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHashError> {
        Ok(digest.as_str().strip_prefix(STUB_PREFIX) == Some(password))
    }

    async fn verify_decoy(&self, _password: &str) {}
}

/// HTTP state wired to in-memory repositories and the stub hasher.
pub fn memory_state() -> HttpState {
    let identity = Arc::new(IdentityService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(StubHasher),
    ));
    let grievances = Arc::new(GrievanceService::new(
        Arc::new(InMemoryGrievanceRepository::new()),
        Arc::new(DefaultClock),
    ));
    HttpState::new(identity.clone(), identity, grievances.clone(), grievances)
}
