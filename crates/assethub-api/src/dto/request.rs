//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use assethub_entity::asset::{AssetPatch, AssetStatus, NewAsset, OperationState};
use assethub_entity::catalog::{
    AssetModelPatch, AssetTypePatch, NewAssetModelInfo, NewAssetType,
};
use assethub_entity::lifecycle::{Disposition, LifecycleAction};
use assethub_entity::org_unit::{NewOrganisationUnit, OrgUnitCategory, OrgUnitPatch};
use assethub_entity::person::{NewPerson, PersonPatch};
use assethub_service::lifecycle::{AssetOverride, OffboardingRequest, TransitionRequest};

/// Create asset request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAssetRequest {
    /// Inventory tag.
    #[validate(length(min = 1, max = 100))]
    pub asset_tag: Option<String>,
    /// Serial number.
    #[validate(length(min = 1, max = 200))]
    pub serial_number: Option<String>,
    /// Catalog model reference.
    pub asset_model_id: Uuid,
    /// Initial lifecycle status (defaults to `spare`).
    pub status: Option<AssetStatus>,
    /// Initial operational state (defaults to `normal`).
    pub operation_state: Option<OperationState>,
    /// Date of purchase.
    pub purchase_date: Option<NaiveDate>,
    /// Supplier name.
    pub supplier: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Notes.
    pub notes: Option<String>,
    /// Initial location.
    pub location_id: Option<Uuid>,
    /// Who registered the asset.
    pub actor: Option<String>,
}

impl CreateAssetRequest {
    /// Split into the new-asset record and the acting identity.
    pub fn into_parts(self) -> (NewAsset, Option<String>) {
        (
            NewAsset {
                asset_tag: self.asset_tag,
                serial_number: self.serial_number,
                asset_model_id: self.asset_model_id,
                status: self.status,
                operation_state: self.operation_state,
                purchase_date: self.purchase_date,
                supplier: self.supplier,
                description: self.description,
                notes: self.notes,
                location_id: self.location_id,
            },
            self.actor,
        )
    }
}

/// Update asset request body (descriptive fields only).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAssetRequest {
    /// New inventory tag.
    pub asset_tag: Option<String>,
    /// New serial number.
    pub serial_number: Option<String>,
    /// New purchase date.
    pub purchase_date: Option<NaiveDate>,
    /// New supplier.
    pub supplier: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New notes.
    pub notes: Option<String>,
    /// New operational state.
    pub operation_state: Option<OperationState>,
}

impl From<UpdateAssetRequest> for AssetPatch {
    fn from(req: UpdateAssetRequest) -> Self {
        Self {
            asset_tag: req.asset_tag,
            serial_number: req.serial_number,
            purchase_date: req.purchase_date,
            supplier: req.supplier,
            description: req.description,
            notes: req.notes,
            operation_state: req.operation_state,
        }
    }
}

/// Lifecycle transition request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionActionRequest {
    /// The lifecycle action.
    pub action: LifecycleAction,
    /// Receiving person (`deploy`).
    pub person_id: Option<Uuid>,
    /// Destination location.
    pub target_location_id: Option<Uuid>,
    /// Expected return date (`deploy`).
    pub expected_return_date: Option<NaiveDate>,
    /// Notes for the audit event.
    pub notes: Option<String>,
    /// Who triggered the action.
    pub actor: Option<String>,
    /// Peripherals to deploy alongside the primary (`deploy`).
    #[serde(default)]
    pub peripherals: Vec<Uuid>,
}

impl From<TransitionActionRequest> for TransitionRequest {
    fn from(req: TransitionActionRequest) -> Self {
        Self {
            action: req.action,
            person_id: req.person_id,
            target_location_id: req.target_location_id,
            expected_return_date: req.expected_return_date,
            primary_device: true,
            notes: req.notes,
            actor: req.actor,
            peripherals: req.peripherals,
        }
    }
}

/// Create person request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePersonRequest {
    /// Full display name.
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,
    /// Login/directory name.
    pub username: Option<String>,
    /// Email address.
    #[validate(email)]
    pub email: Option<String>,
    /// Employing company.
    pub company: Option<String>,
    /// Department (organisation unit) reference.
    pub department_id: Option<Uuid>,
    /// Manager reference.
    pub reports_to_id: Option<Uuid>,
}

impl From<CreatePersonRequest> for NewPerson {
    fn from(req: CreatePersonRequest) -> Self {
        Self {
            full_name: req.full_name,
            username: req.username,
            email: req.email,
            company: req.company,
            department_id: req.department_id,
            reports_to_id: req.reports_to_id,
        }
    }
}

/// Update person request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePersonRequest {
    /// New full name.
    pub full_name: Option<String>,
    /// New username.
    pub username: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New company.
    pub company: Option<String>,
    /// New department.
    pub department_id: Option<Uuid>,
    /// New manager.
    pub reports_to_id: Option<Uuid>,
}

impl From<UpdatePersonRequest> for PersonPatch {
    fn from(req: UpdatePersonRequest) -> Self {
        Self {
            full_name: req.full_name,
            username: req.username,
            email: req.email,
            company: req.company,
            department_id: req.department_id,
            reports_to_id: req.reports_to_id,
        }
    }
}

/// Per-asset override in an offboarding request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffboardOverrideRequest {
    /// The asset the override applies to.
    pub asset_id: Uuid,
    /// Disposition for this asset.
    pub disposition: Disposition,
    /// Destination, falling back to the request default.
    pub target_location_id: Option<Uuid>,
    /// Notes, falling back to the request default.
    pub notes: Option<String>,
}

/// Offboarding request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffboardRequest {
    /// Default disposition for every held asset.
    pub disposition: Disposition,
    /// Default destination location.
    pub target_location_id: Option<Uuid>,
    /// Default notes.
    pub notes: Option<String>,
    /// Who triggered the offboarding.
    pub actor: Option<String>,
    /// Per-asset deviations.
    #[serde(default)]
    pub overrides: Vec<OffboardOverrideRequest>,
}

impl From<OffboardRequest> for OffboardingRequest {
    fn from(req: OffboardRequest) -> Self {
        Self {
            disposition: req.disposition,
            target_location_id: req.target_location_id,
            notes: req.notes,
            actor: req.actor,
            overrides: req
                .overrides
                .into_iter()
                .map(|o| AssetOverride {
                    asset_id: o.asset_id,
                    disposition: o.disposition,
                    target_location_id: o.target_location_id,
                    notes: o.notes,
                })
                .collect(),
        }
    }
}

/// Create organisation unit request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOrgUnitRequest {
    /// Unit name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Unit category.
    pub category: OrgUnitCategory,
    /// Description.
    pub description: Option<String>,
}

impl From<CreateOrgUnitRequest> for NewOrganisationUnit {
    fn from(req: CreateOrgUnitRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            description: req.description,
        }
    }
}

/// Update organisation unit request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrgUnitRequest {
    /// New name.
    pub name: Option<String>,
    /// New category.
    pub category: Option<OrgUnitCategory>,
    /// New description.
    pub description: Option<String>,
}

impl From<UpdateOrgUnitRequest> for OrgUnitPatch {
    fn from(req: UpdateOrgUnitRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            description: req.description,
        }
    }
}

/// Create asset type request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAssetTypeRequest {
    /// Type name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Broader grouping.
    pub category: Option<String>,
    /// Description.
    pub description: Option<String>,
}

impl From<CreateAssetTypeRequest> for NewAssetType {
    fn from(req: CreateAssetTypeRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            description: req.description,
        }
    }
}

/// Update asset type request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAssetTypeRequest {
    /// New name.
    pub name: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New description.
    pub description: Option<String>,
}

impl From<UpdateAssetTypeRequest> for AssetTypePatch {
    fn from(req: UpdateAssetTypeRequest) -> Self {
        Self {
            name: req.name,
            category: req.category,
            description: req.description,
        }
    }
}

/// Create asset model request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAssetModelRequest {
    /// Manufacturer name.
    #[validate(length(min = 1, max = 200))]
    pub manufacturer: String,
    /// Manufacturer model number.
    #[validate(length(min = 1, max = 200))]
    pub model_number: String,
    /// The asset type this model belongs to.
    pub asset_type_id: Uuid,
    /// Default description.
    pub default_description: Option<String>,
}

impl From<CreateAssetModelRequest> for NewAssetModelInfo {
    fn from(req: CreateAssetModelRequest) -> Self {
        Self {
            manufacturer: req.manufacturer,
            model_number: req.model_number,
            asset_type_id: req.asset_type_id,
            default_description: req.default_description,
        }
    }
}

/// Update asset model request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAssetModelRequest {
    /// New manufacturer.
    pub manufacturer: Option<String>,
    /// New model number.
    pub model_number: Option<String>,
    /// New asset type.
    pub asset_type_id: Option<Uuid>,
    /// New default description.
    pub default_description: Option<String>,
}

impl From<UpdateAssetModelRequest> for AssetModelPatch {
    fn from(req: UpdateAssetModelRequest) -> Self {
        Self {
            manufacturer: req.manufacturer,
            model_number: req.model_number,
            asset_type_id: req.asset_type_id,
            default_description: req.default_description,
        }
    }
}
