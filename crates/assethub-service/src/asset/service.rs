//! Asset registration, lookup, and descriptive updates.
//!
//! Lifecycle state is out of scope here: status and lifecycle-driven
//! location changes go through the transition engine only.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::{
    AssetRegistry, AssignmentLedger, AuditTrail, CatalogStore, OrgUnitDirectory, RelationshipGraph,
};
use assethub_core::types::filter::AssetFilter;
use assethub_core::types::pagination::{PageRequest, PageResponse};
use assethub_entity::asset::{Asset, AssetPatch, NewAsset};
use assethub_entity::assignment::Assignment;
use assethub_entity::catalog::AssetModelInfo;
use assethub_entity::event::{AssetEvent, EventAction, NewAssetEvent};
use assethub_entity::org_unit::OrganisationUnit;
use assethub_entity::relationship::AssetRelationship;

/// An asset with its catalog, location, assignment, and relationship
/// context resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDetails {
    /// The asset record itself.
    pub asset: Asset,
    /// The catalog model the asset is an instance of.
    pub model: Option<AssetModelInfo>,
    /// The asset's current location.
    pub location: Option<OrganisationUnit>,
    /// The open assignment, if the asset is currently held.
    pub open_assignment: Option<Assignment>,
    /// Full assignment history, newest first.
    pub assignments: Vec<Assignment>,
    /// Peripheral edges touching the asset, either side.
    pub relationships: Vec<AssetRelationship>,
}

/// Handles asset registration and descriptive maintenance.
pub struct AssetService {
    assets: Arc<dyn AssetRegistry>,
    ledger: Arc<dyn AssignmentLedger>,
    graph: Arc<dyn RelationshipGraph>,
    audit: Arc<dyn AuditTrail>,
    catalog: Arc<dyn CatalogStore>,
    org_units: Arc<dyn OrgUnitDirectory>,
}

impl AssetService {
    /// Create a new asset service.
    pub fn new(
        assets: Arc<dyn AssetRegistry>,
        ledger: Arc<dyn AssignmentLedger>,
        graph: Arc<dyn RelationshipGraph>,
        audit: Arc<dyn AuditTrail>,
        catalog: Arc<dyn CatalogStore>,
        org_units: Arc<dyn OrgUnitDirectory>,
    ) -> Self {
        Self {
            assets,
            ledger,
            graph,
            audit,
            catalog,
            org_units,
        }
    }

    /// Register a new asset and record its `created` audit event.
    pub async fn create(&self, new_asset: NewAsset, actor: Option<String>) -> AppResult<Asset> {
        if !self.catalog.model_exists(new_asset.asset_model_id).await? {
            return Err(AppError::validation(format!(
                "Asset model {} does not exist",
                new_asset.asset_model_id
            )));
        }
        if let Some(location_id) = new_asset.location_id {
            if !self.org_units.exists(location_id).await? {
                return Err(AppError::validation(format!(
                    "Organisation unit {location_id} does not exist"
                )));
            }
        }

        let asset = self.assets.insert(new_asset).await?;
        self.audit
            .append(NewAssetEvent {
                asset_id: asset.id,
                action: EventAction::Created,
                actor,
                from_status: None,
                to_status: Some(asset.status),
                from_location_id: None,
                to_location_id: asset.location_id,
                notes: None,
            })
            .await?;

        info!(asset_id = %asset.id, status = %asset.status, "registered asset");
        Ok(asset)
    }

    /// Fetch an asset by id.
    pub async fn get(&self, id: Uuid) -> AppResult<Asset> {
        self.assets
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))
    }

    /// Fetch an asset with its context hydrated.
    pub async fn get_details(&self, id: Uuid) -> AppResult<AssetDetails> {
        let asset = self.get(id).await?;
        let model = self.catalog.get_model(asset.asset_model_id).await?;
        let location = match asset.location_id {
            Some(location_id) => self.org_units.get(location_id).await?,
            None => None,
        };
        let open_assignment = self.ledger.find_open(id).await?;
        let assignments = self.ledger.list_for_asset(id).await?;
        let relationships = self.graph.list_for_asset(id).await?;
        Ok(AssetDetails {
            asset,
            model,
            location,
            open_assignment,
            assignments,
            relationships,
        })
    }

    /// Update descriptive fields.
    pub async fn patch(&self, id: Uuid, patch: AssetPatch) -> AppResult<Asset> {
        if patch.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }
        self.assets.update_details(id, patch).await
    }

    /// Delete an asset.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.ledger.find_open(id).await?.is_some() {
            return Err(AppError::conflict(
                "Asset has an open assignment and cannot be deleted",
            ));
        }
        if self.assets.remove(id).await? {
            info!(asset_id = %id, "deleted asset");
            Ok(())
        } else {
            Err(AppError::not_found(format!("Asset {id} not found")))
        }
    }

    /// List assets matching the filter, paginated.
    pub async fn list(
        &self,
        filter: &AssetFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Asset>> {
        self.assets.list(filter, page).await
    }

    /// List an asset's audit trail, newest first.
    pub async fn events(&self, id: Uuid) -> AppResult<Vec<AssetEvent>> {
        // Distinguish "no events" from "no such asset".
        self.get(id).await?;
        self.audit.list_for_asset(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use assethub_core::error::ErrorKind;
    use assethub_core::traits::CatalogStore;
    use assethub_database::MemoryInventory;
    use assethub_entity::asset::{AssetPatch, AssetStatus, NewAsset};
    use assethub_entity::catalog::{NewAssetModelInfo, NewAssetType};
    use assethub_entity::event::EventAction;

    use super::AssetService;

    async fn service_with_model() -> (AssetService, Arc<MemoryInventory>, Uuid) {
        let store = Arc::new(MemoryInventory::new());
        let asset_type = store
            .insert_type(NewAssetType {
                name: "Laptop".into(),
                category: Some("computing".into()),
                description: None,
            })
            .await
            .unwrap();
        let model = store
            .insert_model(NewAssetModelInfo {
                manufacturer: "Lenovo".into(),
                model_number: "T14".into(),
                asset_type_id: asset_type.id,
                default_description: None,
            })
            .await
            .unwrap();
        let service = AssetService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        );
        (service, store, model.id)
    }

    fn new_asset(model_id: Uuid) -> NewAsset {
        NewAsset {
            asset_tag: Some("AH-1001".into()),
            serial_number: Some("SN-1".into()),
            asset_model_id: model_id,
            status: None,
            operation_state: None,
            purchase_date: None,
            supplier: None,
            description: Some("Developer laptop".into()),
            notes: None,
            location_id: None,
        }
    }

    #[tokio::test]
    async fn create_records_a_created_event() {
        let (service, _store, model_id) = service_with_model().await;
        let asset = service
            .create(new_asset(model_id), Some("it-admin".into()))
            .await
            .unwrap();
        assert_eq!(asset.status, AssetStatus::Spare);

        let events = service.events(asset.id).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, EventAction::Created);
        assert_eq!(events[0].to_status, Some(AssetStatus::Spare));
        assert_eq!(events[0].actor.as_deref(), Some("it-admin"));
    }

    #[tokio::test]
    async fn create_rejects_an_unknown_model() {
        let (service, _store, _model_id) = service_with_model().await;
        let err = service
            .create(new_asset(Uuid::new_v4()), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn details_hydrate_the_model() {
        let (service, _store, model_id) = service_with_model().await;
        let asset = service.create(new_asset(model_id), None).await.unwrap();

        let details = service.get_details(asset.id).await.unwrap();
        assert_eq!(details.asset.id, asset.id);
        assert_eq!(details.model.unwrap().id, model_id);
        assert!(details.open_assignment.is_none());
        assert!(details.assignments.is_empty());
    }

    #[tokio::test]
    async fn empty_patch_is_rejected() {
        let (service, _store, model_id) = service_with_model().await;
        let asset = service.create(new_asset(model_id), None).await.unwrap();

        let err = service
            .patch(asset.id, AssetPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let patched = service
            .patch(
                asset.id,
                AssetPatch {
                    notes: Some("reimaged".into()),
                    ..AssetPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(patched.notes.as_deref(), Some("reimaged"));
    }

    #[tokio::test]
    async fn delete_unknown_is_not_found() {
        let (service, _store, _model_id) = service_with_model().await;
        let err = service.delete(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
