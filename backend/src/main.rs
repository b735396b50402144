//! Exercise tracker entry-point: loads settings, prepares storage, and runs
//! the HTTP server.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exercise_tracker::config::ServiceSettings;
use exercise_tracker::inbound::http::health::HealthState;
use exercise_tracker::outbound::persistence::{DbPool, PoolConfig, apply_pending_migrations};
use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::from_env(&DefaultEnv::new()).wrap_err("load settings")?;
    let mut config =
        ServerConfig::new(settings.bind_addr).with_views_dir(settings.views_dir.clone());

    if let Some(database_url) = settings.database_url.clone() {
        let applied = apply_pending_migrations(database_url.clone())
            .await
            .wrap_err("apply database migrations")?;
        info!(applied, "database schema up to date");

        let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size))
            .await
            .wrap_err("build database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).wrap_err("start HTTP server")?;
    server.await.wrap_err("run HTTP server")?;

    health_state.mark_unhealthy();
    info!("server stopped");
    Ok(())
}
