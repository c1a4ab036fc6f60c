//! AssetHub server entry point.
//!
//! Loads configuration, initializes logging, connects to the database,
//! runs migrations and starts the HTTP API.

use tracing_subscriber::{EnvFilter, fmt};

use assethub_core::config::AppConfig;
use assethub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("ASSETHUB_ENV").unwrap_or_else(|_| "default".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging according to the logging configuration.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AssetHub v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let pool = assethub_database::connection::connect_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    assethub_database::migration::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    assethub_api::app::run_server(config, pool).await?;

    tracing::info!("AssetHub server shut down gracefully");
    Ok(())
}
