//! Typed accessors over the raw session environment.

use std::time::Duration;

use actix_web::cookie::SameSite;
use mockable::Env;
use tracing::warn;

use super::{BuildMode, DEFAULT_IDLE_TIMEOUT, IDLE_TIMEOUT_ENV, SAMESITE_ENV, SessionConfigError};

const FLAG_VALUES: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_VALUES: &str = "Strict|Lax|None";
const SECONDS: &str = "a positive number of seconds";

pub(super) struct EnvReader<'a, E> {
    env: &'a E,
    mode: BuildMode,
}

impl<'a, E: Env> EnvReader<'a, E> {
    pub(super) fn new(env: &'a E, mode: BuildMode) -> Self {
        Self { env, mode }
    }

    /// Debug builds log and use `fallback`; release builds return `error`.
    fn tolerate<T>(&self, fallback: T, error: SessionConfigError) -> Result<T, SessionConfigError> {
        if self.mode.is_debug() {
            warn!(%error, "session setting defaulted");
            Ok(fallback)
        } else {
            Err(error)
        }
    }

    pub(super) fn flag(&self, name: &'static str, debug_default: bool) -> Result<bool, SessionConfigError> {
        let Some(value) = self.env.string(name) else {
            return self.tolerate(debug_default, SessionConfigError::Missing { name });
        };
        match parse_flag(&value) {
            Some(flag) => Ok(flag),
            None => self.tolerate(
                debug_default,
                SessionConfigError::Invalid {
                    name,
                    value,
                    expected: FLAG_VALUES,
                },
            ),
        }
    }

    pub(super) fn same_site(&self, cookie_secure: bool) -> Result<SameSite, SessionConfigError> {
        let fallback = if self.mode.is_debug() {
            SameSite::Lax
        } else {
            SameSite::Strict
        };
        let Some(value) = self.env.string(SAMESITE_ENV) else {
            return self.tolerate(fallback, SessionConfigError::Missing { name: SAMESITE_ENV });
        };

        match value.to_ascii_lowercase().as_str() {
            "strict" => Ok(SameSite::Strict),
            "lax" => Ok(SameSite::Lax),
            // Browsers drop SameSite=None cookies that are not Secure.
            "none" if cookie_secure => Ok(SameSite::None),
            "none" => self
                .tolerate((), SessionConfigError::SameSiteNoneWithoutSecure)
                .map(|()| SameSite::None),
            _ => self.tolerate(
                fallback,
                SessionConfigError::Invalid {
                    name: SAMESITE_ENV,
                    value,
                    expected: SAMESITE_VALUES,
                },
            ),
        }
    }

    /// Unset is valid in both modes and yields [`DEFAULT_IDLE_TIMEOUT`].
    pub(super) fn idle_timeout(&self) -> Result<Duration, SessionConfigError> {
        let Some(value) = self.env.string(IDLE_TIMEOUT_ENV) else {
            return Ok(DEFAULT_IDLE_TIMEOUT);
        };
        match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => self.tolerate(
                DEFAULT_IDLE_TIMEOUT,
                SessionConfigError::Invalid {
                    name: IDLE_TIMEOUT_ENV,
                    value,
                    expected: SECONDS,
                },
            ),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(true))]
    #[case("YES", Some(true))]
    #[case(" y ", Some(true))]
    #[case("n", Some(false))]
    #[case("False", Some(false))]
    #[case("maybe", None)]
    #[case("", None)]
    fn recognises_flag_spellings(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_flag(raw), expected);
    }
}
