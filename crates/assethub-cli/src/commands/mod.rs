//! CLI command definitions and dispatch.

pub mod asset;
pub mod dashboard;
pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

use assethub_core::config::AppConfig;
use assethub_core::error::AppError;

use crate::output::OutputFormat;

/// AssetHub — IT asset lifecycle tracking
#[derive(Debug, Parser)]
#[command(name = "assethub", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (reads config/<env>.toml over config/default.toml)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the AssetHub server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Load demo catalog and fleet data
    Seed(seed::SeedArgs),
    /// Asset inspection
    Asset(asset::AssetArgs),
    /// Fleet dashboard summary
    Dashboard,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::Seed(args) => seed::execute(args, &self.env).await,
            Commands::Asset(args) => asset::execute(args, &self.env, self.format).await,
            Commands::Dashboard => dashboard::execute(&self.env, self.format).await,
        }
    }
}

/// Helper: load configuration for the selected environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::PgPool, AppError> {
    assethub_database::connection::connect_pool(&config.database).await
}
