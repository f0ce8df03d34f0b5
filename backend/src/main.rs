//! Grievance portal entry-point: loads settings, prepares the store and
//! starts the HTTP server.

mod server;
mod settings;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
use backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server};
use settings::AppSettings;

/// Connect to PostgreSQL and bring the schema up to date.
async fn prepare_database(settings: &AppSettings, url: &str) -> std::io::Result<DbPool> {
    let applied = run_migrations(url)
        .await
        .map_err(|err| std::io::Error::other(format!("database migration failed: {err}")))?;
    info!(applied, "database migrations complete");

    let mut pool_config = PoolConfig::new(url);
    if let Some(max) = settings.db_max_connections {
        pool_config = pool_config.with_max_size(max);
    }
    if let Some(timeout) = settings.db_connection_timeout() {
        pool_config = pool_config.with_connection_timeout(timeout);
    }
    DbPool::new(pool_config)
        .await
        .map_err(|err| std::io::Error::other(format!("database pool setup failed: {err}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|err| std::io::Error::other(format!("invalid configuration: {err}")))?;
    let env = DefaultEnv::new();
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(|err| std::io::Error::other(format!("invalid session configuration: {err}")))?;

    let mut config = ServerConfig::new(session, settings.bind_addr());
    match settings.database_url() {
        Some(url) => {
            let pool = prepare_database(&settings, url).await?;
            config = config.with_db_pool(pool);
        }
        None => warn!("GRIEVANCE_DATABASE_URL not set; data is kept in memory and lost on restart"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}

#[cfg(test)]
mod tests;
