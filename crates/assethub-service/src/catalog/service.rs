//! CRUD for asset types, asset models, and organisation units.

use std::sync::Arc;

use uuid::Uuid;

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::{CatalogStore, OrgUnitDirectory};
use assethub_entity::catalog::{
    AssetModelInfo, AssetModelPatch, AssetType, AssetTypePatch, NewAssetModelInfo, NewAssetType,
};
use assethub_entity::org_unit::{NewOrganisationUnit, OrgUnitPatch, OrganisationUnit};

/// Handles catalog reference data.
pub struct CatalogService {
    catalog: Arc<dyn CatalogStore>,
    org_units: Arc<dyn OrgUnitDirectory>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(catalog: Arc<dyn CatalogStore>, org_units: Arc<dyn OrgUnitDirectory>) -> Self {
        Self { catalog, org_units }
    }

    /// Register a new asset type.
    pub async fn create_type(&self, new_type: NewAssetType) -> AppResult<AssetType> {
        if new_type.name.trim().is_empty() {
            return Err(AppError::validation("Type name cannot be empty"));
        }
        self.catalog.insert_type(new_type).await
    }

    /// Update asset type fields.
    pub async fn patch_type(&self, id: Uuid, patch: AssetTypePatch) -> AppResult<AssetType> {
        self.catalog.update_type(id, patch).await
    }

    /// Delete an asset type.
    pub async fn delete_type(&self, id: Uuid) -> AppResult<()> {
        if self.catalog.remove_type(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Asset type {id} not found")))
        }
    }

    /// List all asset types.
    pub async fn list_types(&self) -> AppResult<Vec<AssetType>> {
        self.catalog.list_types().await
    }

    /// Register a new asset model under an existing type.
    pub async fn create_model(&self, new_model: NewAssetModelInfo) -> AppResult<AssetModelInfo> {
        if self.catalog.get_type(new_model.asset_type_id).await?.is_none() {
            return Err(AppError::validation(format!(
                "Asset type {} does not exist",
                new_model.asset_type_id
            )));
        }
        self.catalog.insert_model(new_model).await
    }

    /// Update asset model fields.
    pub async fn patch_model(&self, id: Uuid, patch: AssetModelPatch) -> AppResult<AssetModelInfo> {
        if let Some(asset_type_id) = patch.asset_type_id {
            if self.catalog.get_type(asset_type_id).await?.is_none() {
                return Err(AppError::validation(format!(
                    "Asset type {asset_type_id} does not exist"
                )));
            }
        }
        self.catalog.update_model(id, patch).await
    }

    /// Delete an asset model.
    pub async fn delete_model(&self, id: Uuid) -> AppResult<()> {
        if self.catalog.remove_model(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Asset model {id} not found")))
        }
    }

    /// List all asset models.
    pub async fn list_models(&self) -> AppResult<Vec<AssetModelInfo>> {
        self.catalog.list_models().await
    }

    /// Register a new organisation unit.
    pub async fn create_unit(&self, new_unit: NewOrganisationUnit) -> AppResult<OrganisationUnit> {
        if new_unit.name.trim().is_empty() {
            return Err(AppError::validation("Unit name cannot be empty"));
        }
        self.org_units.insert(new_unit).await
    }

    /// Update organisation unit fields.
    pub async fn patch_unit(&self, id: Uuid, patch: OrgUnitPatch) -> AppResult<OrganisationUnit> {
        self.org_units.update(id, patch).await
    }

    /// Delete an organisation unit.
    pub async fn delete_unit(&self, id: Uuid) -> AppResult<()> {
        if self.org_units.remove(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!(
                "Organisation unit {id} not found"
            )))
        }
    }

    /// List all organisation units.
    pub async fn list_units(&self) -> AppResult<Vec<OrganisationUnit>> {
        self.org_units.list().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use assethub_core::error::ErrorKind;
    use assethub_database::MemoryInventory;
    use assethub_entity::catalog::{NewAssetModelInfo, NewAssetType};
    use assethub_entity::org_unit::{NewOrganisationUnit, OrgUnitCategory};

    use super::CatalogService;

    fn service() -> CatalogService {
        let store = Arc::new(MemoryInventory::new());
        CatalogService::new(store.clone(), store)
    }

    #[tokio::test]
    async fn models_require_an_existing_type() {
        let service = service();
        let err = service
            .create_model(NewAssetModelInfo {
                manufacturer: "Dell".into(),
                model_number: "U2720Q".into(),
                asset_type_id: Uuid::new_v4(),
                default_description: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let display = service
            .create_type(NewAssetType {
                name: "Monitor".into(),
                category: Some("display".into()),
                description: None,
            })
            .await
            .unwrap();
        service
            .create_model(NewAssetModelInfo {
                manufacturer: "Dell".into(),
                model_number: "U2720Q".into(),
                asset_type_id: display.id,
                default_description: None,
            })
            .await
            .unwrap();
        assert_eq!(service.list_models().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_type_names_conflict() {
        let service = service();
        let new_type = NewAssetType {
            name: "Laptop".into(),
            category: None,
            description: None,
        };
        service.create_type(new_type.clone()).await.unwrap();
        let err = service.create_type(new_type).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn units_are_listed_name_ordered() {
        let service = service();
        for name in ["Warehouse B", "Archive", "Warehouse A"] {
            service
                .create_unit(NewOrganisationUnit {
                    name: name.into(),
                    category: OrgUnitCategory::Warehouse,
                    description: None,
                })
                .await
                .unwrap();
        }
        let names: Vec<String> = service
            .list_units()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["Archive", "Warehouse A", "Warehouse B"]);
    }
}
