//! Asset inspection commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use assethub_api::state::{AppState, Registries};
use assethub_core::error::AppError;
use assethub_core::types::filter::AssetFilter;
use assethub_core::types::pagination::PageRequest;
use assethub_entity::asset::{Asset, AssetStatus};

use crate::output::{self, OutputFormat};

/// Arguments for the asset command
#[derive(Debug, Args)]
pub struct AssetArgs {
    /// Asset subcommand
    #[command(subcommand)]
    pub command: AssetCommand,
}

/// Asset subcommands
#[derive(Debug, Subcommand)]
pub enum AssetCommand {
    /// List assets
    List {
        /// Only assets in this status
        #[arg(long)]
        status: Option<AssetStatus>,
        /// Free-text search over tag/serial/description
        #[arg(long)]
        search: Option<String>,
        /// Page number
        #[arg(long, default_value = "1")]
        page: u64,
        /// Page size
        #[arg(long, default_value = "25")]
        per_page: u64,
    },
    /// Show one asset's audit trail
    Events {
        /// The asset id
        id: Uuid,
    },
}

/// One asset list row.
#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    /// Asset id
    id: Uuid,
    /// Inventory tag
    tag: String,
    /// Serial number
    serial: String,
    /// Lifecycle status
    status: AssetStatus,
    /// Operational state
    operation: String,
}

impl From<&Asset> for AssetRow {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id,
            tag: asset.asset_tag.clone().unwrap_or_default(),
            serial: asset.serial_number.clone().unwrap_or_default(),
            status: asset.status,
            operation: asset.operation_state.to_string(),
        }
    }
}

/// Execute asset commands
pub async fn execute(args: &AssetArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;
    let state = AppState::build(config, Registries::postgres(pool));

    match &args.command {
        AssetCommand::List {
            status,
            search,
            page,
            per_page,
        } => {
            let filter = AssetFilter {
                status: *status,
                search: search.clone(),
                ..AssetFilter::default()
            };
            let result = state
                .assets
                .list(&filter, &PageRequest::new(*page, *per_page))
                .await?;
            let rows: Vec<AssetRow> = result.items.iter().map(AssetRow::from).collect();
            output::print_list(&rows, format);
            println!(
                "Page {}/{} ({} assets total)",
                result.page, result.total_pages, result.total_items
            );
        }
        AssetCommand::Events { id } => {
            let events = state.assets.events(*id).await?;
            output::print_item(&events, format);
        }
    }

    Ok(())
}
