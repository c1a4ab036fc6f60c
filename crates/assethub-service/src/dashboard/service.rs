//! Fleet-wide aggregation counts.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use assethub_core::result::AppResult;
use assethub_core::traits::AssetRegistry;
use assethub_entity::dashboard::{LabelCount, StatusCount};

/// One dashboard snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Total number of registered assets, retired included.
    pub total_assets: i64,
    /// Assets per lifecycle status.
    pub by_status: Vec<StatusCount>,
    /// Assets per asset type name.
    pub by_type: Vec<LabelCount>,
    /// Actively assigned assets per holder department.
    pub by_department: Vec<LabelCount>,
}

/// Computes dashboard summaries from the asset registry.
pub struct DashboardService {
    assets: Arc<dyn AssetRegistry>,
}

impl DashboardService {
    /// Create a new dashboard service.
    pub fn new(assets: Arc<dyn AssetRegistry>) -> Self {
        Self { assets }
    }

    /// Compute the current fleet summary.
    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        let by_status = self.assets.count_by_status().await?;
        let total_assets = by_status.iter().map(|row| row.count).sum();
        let by_type = self.assets.count_by_type().await?;
        let by_department = self.assets.count_by_department().await?;
        Ok(DashboardSummary {
            total_assets,
            by_status,
            by_type,
            by_department,
        })
    }
}
