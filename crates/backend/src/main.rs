use anyhow::{Context, Result};
use backend::{config::Config, handler::AppRouter, state::AppState};
use dotenv::dotenv;
use shared::{config::ConnectionManager, utils::init_logger};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let _log_guard = init_logger("backend", is_dev, is_enable_file);

    info!("🚀 Starting backend initialization...");

    let config = Config::init()
        .inspect_err(|e| error!("💀 Invalid configuration: {e:#}"))
        .context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database, config.db_max_conn)
        .await
        .inspect_err(|e| error!("💀 Database unreachable, refusing to serve: {e:#}"))
        .context("Failed to initialize database pool")?;

    let state = AppState::new(pool.clone());

    let served = AppRouter::serve(config.port, state, &config.router).await;

    info!("🛑 Closing database pool...");
    pool.close().await;

    served.context("Failed to start server")?;

    info!("✅ Backend shutdown complete.");
    Ok(())
}
