//! Tests for the application bootstrap: process environment and readiness
//! signalling.

use super::{ServerConfig, create_server};
use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::session_config::{
    ALLOW_EPHEMERAL_ENV, BuildMode, COOKIE_SECURE_ENV, DEFAULT_IDLE_TIMEOUT, IDLE_TIMEOUT_ENV,
    KEY_FILE_ENV, SAMESITE_ENV, SessionSettings, session_settings_from_env,
};
use env_lock::lock_env;
use mockable::DefaultEnv;
use rstest::{fixture, rstest};

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn session_settings() -> SessionSettings {
    SessionSettings {
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
        idle_timeout: DEFAULT_IDLE_TIMEOUT,
    }
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready_with_in_memory_store(
    health_state: web::Data<HealthState>,
    session_settings: SessionSettings,
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let config = ServerConfig::new(
        session_settings,
        "127.0.0.1:0".parse().expect("socket address"),
    );
    let _server = create_server(health_state.clone(), config).expect("server should build");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_rt::test]
async fn create_server_reports_bind_failures(
    health_state: web::Data<HealthState>,
    session_settings: SessionSettings,
) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("reserve port");
    let taken = listener.local_addr().expect("local addr");

    let result = create_server(
        health_state.clone(),
        ServerConfig::new(session_settings, taken),
    );

    assert!(result.is_err(), "binding an occupied port should fail");
    assert!(!health_state.is_ready());
}

#[rstest]
fn session_settings_load_from_the_process_environment() {
    let _guard = lock_env([
        (KEY_FILE_ENV, Some("/nonexistent/grievance-session-key".to_owned())),
        (COOKIE_SECURE_ENV, Some("0".to_owned())),
        (SAMESITE_ENV, Some("Strict".to_owned())),
        (ALLOW_EPHEMERAL_ENV, None),
        (IDLE_TIMEOUT_ENV, Some("300".to_owned())),
    ]);

    let settings = session_settings_from_env(&DefaultEnv::new(), BuildMode::Debug)
        .expect("debug settings from the real environment");
    assert!(!settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
    assert_eq!(settings.idle_timeout.as_secs(), 300);
}
