//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Error, Registration, UserId};

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Hash the password and store a new account.
    async fn register(&self, request: Registration) -> Result<UserId, Error>;
}
