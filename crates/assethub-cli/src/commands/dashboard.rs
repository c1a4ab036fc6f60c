//! Fleet dashboard summary command.

use assethub_api::state::{AppState, Registries};
use assethub_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Execute the dashboard command
pub async fn execute(env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;
    let state = AppState::build(config, Registries::postgres(pool));

    let summary = state.dashboard.summary().await?;

    match format {
        OutputFormat::Json => output::print_item(&summary, format),
        OutputFormat::Table => {
            println!("Fleet summary");
            output::print_kv("Total assets", &summary.total_assets.to_string());
            for row in &summary.by_status {
                output::print_kv(&format!("  {}", row.status), &row.count.to_string());
            }
            println!("By type");
            for row in &summary.by_type {
                output::print_kv(&row.label, &row.count.to_string());
            }
            println!("By department (active assignments)");
            for row in &summary.by_department {
                output::print_kv(&row.label, &row.count.to_string());
            }
        }
    }

    Ok(())
}
