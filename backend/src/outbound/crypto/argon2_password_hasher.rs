//! Argon2id implementation of the `PasswordHasher` port.
//!
//! Hashing is CPU bound, so each call runs on Tokio's blocking pool with the
//! caller's trace id re-entered for log correlation.

use std::sync::{Arc, OnceLock};

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use tracing::warn;
use zeroize::Zeroizing;

use crate::domain::ports::{PasswordHashError, PasswordHasher};
use crate::domain::{PasswordDigest, TraceId};

/// Plaintext used to derive the decoy digest for unknown accounts.
const DECOY_PASSWORD: &str = "grievance-portal-decoy";

/// Argon2id hasher producing PHC strings.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    inner: Arc<Inner>,
}

struct Inner {
    argon2: Argon2<'static>,
    decoy: OnceLock<Option<String>>,
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::with_params(Params::default())
    }
}

impl Argon2PasswordHasher {
    /// Hasher with the Argon2 crate's default (OWASP recommended) parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with explicit cost parameters. Lower costs are only suitable
    /// for tests.
    pub fn with_params(params: Params) -> Self {
        Self {
            inner: Arc::new(Inner {
                argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
                decoy: OnceLock::new(),
            }),
        }
    }
}

impl Inner {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| PasswordHashError::hashing(err.to_string()))
    }

    fn verify(&self, password: &str, encoded: &str) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(encoded)
            .map_err(|err| PasswordHashError::malformed_digest(err.to_string()))?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(PasswordHashError::hashing(err.to_string())),
        }
    }

    fn decoy_digest(&self) -> Option<&str> {
        self.decoy
            .get_or_init(|| match self.hash(DECOY_PASSWORD) {
                Ok(digest) => Some(digest),
                Err(err) => {
                    warn!(error = %err, "decoy digest unavailable");
                    None
                }
            })
            .as_deref()
    }
}

async fn run_blocking<T, F>(inner: &Arc<Inner>, f: F) -> Result<T, PasswordHashError>
where
    T: Send + 'static,
    F: FnOnce(&Inner) -> Result<T, PasswordHashError> + Send + 'static,
{
    let inner = Arc::clone(inner);
    let trace_id = TraceId::current();
    tokio::task::spawn_blocking(move || TraceId::sync_scope(trace_id, || f(&inner)))
        .await
        .map_err(|err| PasswordHashError::hashing(format!("hashing task failed: {err}")))?
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordHashError> {
        let password = Zeroizing::new(password.to_owned());
        let encoded = run_blocking(&self.inner, move |inner| inner.hash(&password)).await?;
        PasswordDigest::new(encoded).map_err(|err| PasswordHashError::hashing(err.to_string()))
    }

    async fn verify(
        &self,
        password: &str,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHashError> {
        let password = Zeroizing::new(password.to_owned());
        let encoded = digest.as_str().to_owned();
        run_blocking(&self.inner, move |inner| inner.verify(&password, &encoded)).await
    }

    async fn verify_decoy(&self, password: &str) {
        let password = Zeroizing::new(password.to_owned());
        let outcome = run_blocking(&self.inner, move |inner| match inner.decoy_digest() {
            Some(decoy) => inner.verify(&password, decoy).map(|_| ()),
            None => Ok(()),
        })
        .await;
        if let Err(err) = outcome {
            warn!(error = %err, "decoy verification failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn hasher() -> Argon2PasswordHasher {
        let params = Params::new(8, 1, 1, None).expect("cheap test params");
        Argon2PasswordHasher::with_params(params)
    }

    #[rstest]
    #[tokio::test]
    async fn digest_verifies_original_password(hasher: Argon2PasswordHasher) {
        let digest = hasher.hash("correct horse").await.expect("hash");
        assert!(digest.as_str().starts_with("$argon2id$"));
        assert_ne!(digest.as_str(), "correct horse");
        assert!(hasher.verify("correct horse", &digest).await.expect("verify"));
    }

    #[rstest]
    #[tokio::test]
    async fn wrong_password_does_not_verify(hasher: Argon2PasswordHasher) {
        let digest = hasher.hash("correct horse").await.expect("hash");
        assert!(!hasher.verify("battery staple", &digest).await.expect("verify"));
    }

    #[rstest]
    #[tokio::test]
    async fn salts_differ_between_hashes(hasher: Argon2PasswordHasher) {
        let first = hasher.hash("same").await.expect("hash");
        let second = hasher.hash("same").await.expect("hash");
        assert_ne!(first, second);
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_digest_is_reported(hasher: Argon2PasswordHasher) {
        let digest = PasswordDigest::new("not-a-phc-string").expect("digest");
        let err = hasher
            .verify("anything", &digest)
            .await
            .expect_err("malformed digest");
        assert!(matches!(err, PasswordHashError::MalformedDigest { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn decoy_verification_completes(hasher: Argon2PasswordHasher) {
        hasher.verify_decoy("whatever").await;
        hasher.verify_decoy("again").await;
        assert!(hasher.inner.decoy.get().is_some());
    }
}
