use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::utils::init_logger;
use storefront::{config::Config, handler::AppRouter, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let enable_file_log = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("storefront", enable_file_log);

    let config = Config::init().context("Failed to load configuration")?;

    let state = AppState::new(&config.jwt_secret);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Server stopped");

    Ok(())
}
