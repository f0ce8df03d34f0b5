//! Identity domain service.
//!
//! Implements the registration and login driving ports on top of the user
//! repository and password hasher driven ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    LoginService, PasswordHashError, PasswordHasher, RegistrationService, UserPersistenceError,
    UserRepository,
};
use crate::domain::{Error, LoginCredentials, Registration, User, UserAccount, UserId};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

fn map_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateEmail { .. } => {
            Error::conflict("An account with this email already exists")
        }
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

/// Registration and authentication over a user store.
#[derive(Clone)]
pub struct IdentityService<R, H> {
    users: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> IdentityService<R, H> {
    pub fn new(users: Arc<R>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl<R, H> RegistrationService for IdentityService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn register(&self, request: Registration) -> Result<UserId, Error> {
        let password_digest = self
            .hasher
            .hash(request.password())
            .await
            .map_err(map_hash_error)?;

        let user = User::new(
            UserId::random(),
            request.name().clone(),
            request.email().clone(),
            request.role().clone(),
        );
        let user_id = *user.id();
        let account = UserAccount {
            user,
            password_digest,
        };

        self.users
            .insert(&account)
            .await
            .map_err(map_repository_error)?;

        info!(%user_id, role = %account.user.role(), "user registered");
        Ok(user_id)
    }
}

#[async_trait]
impl<R, H> LoginService for IdentityService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let account = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_repository_error)?;

        let Some(account) = account else {
            self.hasher.verify_decoy(credentials.password()).await;
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        let matches = self
            .hasher
            .verify(credentials.password(), &account.password_digest)
            .await
            .map_err(|err| {
                warn!(user_id = %account.user.id(), error = %err, "password verification failed");
                map_hash_error(err)
            })?;

        if matches {
            Ok(*account.user.id())
        } else {
            Err(Error::unauthorized(INVALID_CREDENTIALS))
        }
    }
}

#[cfg(test)]
#[path = "identity_service_tests.rs"]
mod tests;
