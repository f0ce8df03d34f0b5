//! Session cookie settings read from the environment.
//!
//! Portal sessions are private (encrypted and signed) cookies. The key file,
//! cookie flags and idle timeout are all environment driven:
//!
//! | Variable                    | Release build       | Debug build            |
//! |-----------------------------|---------------------|------------------------|
//! | `SESSION_KEY_FILE`          | >= 64 bytes         | falls back to a random key |
//! | `SESSION_COOKIE_SECURE`     | required            | defaults to on         |
//! | `SESSION_SAMESITE`          | required            | defaults to `Lax`      |
//! | `SESSION_ALLOW_EPHEMERAL`   | required, must be 0 | defaults to off        |
//! | `SESSION_IDLE_TIMEOUT_SECS` | optional            | optional               |

use std::path::{Path, PathBuf};
use std::time::Duration;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroizing;

mod reader;

use reader::EnvReader;

/// Path of the session key file.
pub const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
/// Whether cookies carry the `Secure` attribute.
pub const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
/// `SameSite` policy: `Strict`, `Lax` or `None`.
pub const SAMESITE_ENV: &str = "SESSION_SAMESITE";
/// Permit a random per-process key when the key file is unreadable.
pub const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";
/// Seconds a session survives without a request.
pub const IDLE_TIMEOUT_ENV: &str = "SESSION_IDLE_TIMEOUT_SECS";

/// Idle timeout used when `SESSION_IDLE_TIMEOUT_SECS` is unset.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

const DEFAULT_KEY_PATH: &str = "/var/run/secrets/session_key";
const MIN_KEY_LEN: usize = 64;

/// How strictly the environment is validated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Missing or malformed values fall back to development defaults.
    Debug,
    /// Missing or malformed values are errors.
    Release,
}

impl BuildMode {
    /// Mode matching the current compilation profile.
    ///
    /// ```rust
    /// use backend::inbound::http::session_config::BuildMode;
    ///
    /// let expected = if cfg!(debug_assertions) {
    ///     BuildMode::Debug
    /// } else {
    ///     BuildMode::Release
    /// };
    /// assert_eq!(BuildMode::from_debug_assertions(), expected);
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        self == Self::Debug
    }
}

/// Validated session cookie settings.
pub struct SessionSettings {
    pub key: Key,
    pub cookie_secure: bool,
    pub same_site: SameSite,
    /// Expiry window, pushed forward by every request.
    pub idle_timeout: Duration,
}

/// Reasons the session environment is unusable.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    #[error("{name} must be set")]
    Missing { name: &'static str },
    #[error("{name}={value:?} is invalid; expected {expected}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("cannot read session key {path}: {source}")]
    KeyUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session key {path} holds {length} bytes; at least {min_len} are required")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    #[error("SESSION_SAMESITE=None is only allowed with SESSION_COOKIE_SECURE=1")]
    SameSiteNoneWithoutSecure,
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralKeyInRelease,
}

/// Read and validate the session settings.
///
/// # Errors
///
/// In release builds any missing toggle, malformed value, unreadable or short
/// key file is reported. Debug builds only fail on values that can never work.
///
/// # Examples
///
/// ```rust
/// use backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
/// use mockable::MockEnv;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let key_path = std::env::temp_dir().join("grievance_session_key_doc");
/// std::fs::write(&key_path, [7_u8; 64])?;
/// let key_file = key_path.display().to_string();
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(move |name| match name {
///     "SESSION_KEY_FILE" => Some(key_file.clone()),
///     "SESSION_COOKIE_SECURE" => Some("1".to_owned()),
///     "SESSION_SAMESITE" => Some("Strict".to_owned()),
///     "SESSION_ALLOW_EPHEMERAL" => Some("0".to_owned()),
///     "SESSION_IDLE_TIMEOUT_SECS" => Some("900".to_owned()),
///     _ => None,
/// });
///
/// let settings = session_settings_from_env(&env, BuildMode::Release)?;
/// assert_eq!(settings.idle_timeout.as_secs(), 900);
/// std::fs::remove_file(key_path)?;
/// # Ok(())
/// # }
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let reader = EnvReader::new(env, mode);

    let cookie_secure = reader.flag(COOKIE_SECURE_ENV, true)?;
    let same_site = reader.same_site(cookie_secure)?;
    let allow_ephemeral = reader.flag(ALLOW_EPHEMERAL_ENV, false)?;
    if allow_ephemeral && !mode.is_debug() {
        return Err(SessionConfigError::EphemeralKeyInRelease);
    }
    let idle_timeout = reader.idle_timeout()?;

    let key_path = env
        .string(KEY_FILE_ENV)
        .map_or_else(|| PathBuf::from(DEFAULT_KEY_PATH), PathBuf::from);
    let key = load_key(&key_path, mode, allow_ephemeral)?;

    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
        idle_timeout,
    })
}

fn load_key(path: &Path, mode: BuildMode, allow_ephemeral: bool) -> Result<Key, SessionConfigError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => Zeroizing::new(bytes),
        Err(error) if mode.is_debug() || allow_ephemeral => {
            warn!(path = %path.display(), %error, "session key unreadable; using a random key");
            return Ok(Key::generate());
        }
        Err(source) => {
            return Err(SessionConfigError::KeyUnreadable {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if bytes.len() < MIN_KEY_LEN {
        if mode.is_debug() {
            warn!(path = %path.display(), length = bytes.len(), "session key too short; using a random key");
            return Ok(Key::generate());
        }
        return Err(SessionConfigError::KeyTooShort {
            path: path.to_path_buf(),
            length: bytes.len(),
            min_len: MIN_KEY_LEN,
        });
    }
    Ok(Key::derive_from(&bytes))
}
