//! Asset listing filter.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use assethub_entity::asset::AssetStatus;

/// Filter conditions for asset list queries.
///
/// All conditions are optional and combined with AND. `search` matches
/// case-insensitively against tag, serial number, and description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetFilter {
    /// Only assets in this lifecycle status.
    pub status: Option<AssetStatus>,
    /// Only assets whose model belongs to this asset type.
    pub asset_type_id: Option<Uuid>,
    /// Only assets at this location.
    pub location_id: Option<Uuid>,
    /// Only assets with an open assignment to this person.
    pub person_id: Option<Uuid>,
    /// Case-insensitive free-text search over tag/serial/description.
    pub search: Option<String>,
}

impl AssetFilter {
    /// Whether the filter carries no conditions.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.asset_type_id.is_none()
            && self.location_id.is_none()
            && self.person_id.is_none()
            && self.search.is_none()
    }
}
