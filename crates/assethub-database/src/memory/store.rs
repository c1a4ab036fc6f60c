//! In-memory implementation of every registry trait.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::{
    AssetRegistry, AssignmentLedger, AuditTrail, CatalogStore, OrgUnitDirectory, PersonDirectory,
    RelationshipGraph,
};
use assethub_core::types::filter::AssetFilter;
use assethub_core::types::pagination::{PageRequest, PageResponse};
use assethub_entity::asset::{
    Asset, AssetPatch, AssetStateChange, AssetStatus, NewAsset, OperationState,
};
use assethub_entity::assignment::{Assignment, NewAssignment};
use assethub_entity::catalog::{
    AssetModelInfo, AssetModelPatch, AssetType, AssetTypePatch, NewAssetModelInfo, NewAssetType,
};
use assethub_entity::dashboard::{LabelCount, StatusCount};
use assethub_entity::event::{AssetEvent, NewAssetEvent};
use assethub_entity::org_unit::{NewOrganisationUnit, OrgUnitPatch, OrganisationUnit};
use assethub_entity::person::{NewPerson, Person, PersonPatch};
use assethub_entity::relationship::{AssetRelationship, RelationType};

/// Backing store behind the lock.
#[derive(Debug, Default)]
struct Inner {
    assets: HashMap<Uuid, Asset>,
    assignments: Vec<Assignment>,
    relationships: Vec<AssetRelationship>,
    events: Vec<AssetEvent>,
    people: HashMap<Uuid, Person>,
    org_units: HashMap<Uuid, OrganisationUnit>,
    asset_types: HashMap<Uuid, AssetType>,
    asset_models: HashMap<Uuid, AssetModelInfo>,
    event_seq: i64,
}

/// In-memory inventory implementing every registry trait.
///
/// All state lives behind a single [`RwLock`]; no lock is held across an
/// await point. Sort orders match the PostgreSQL repositories so the two
/// backends are interchangeable in tests.
#[derive(Debug, Default)]
pub struct MemoryInventory {
    inner: RwLock<Inner>,
}

impl MemoryInventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssetRegistry for MemoryInventory {
    async fn get(&self, id: Uuid) -> AppResult<Option<Asset>> {
        let inner = self.inner.read().await;
        Ok(inner.assets.get(&id).cloned())
    }

    async fn insert(&self, asset: NewAsset) -> AppResult<Asset> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let record = Asset {
            id: Uuid::new_v4(),
            asset_tag: asset.asset_tag,
            serial_number: asset.serial_number,
            asset_model_id: asset.asset_model_id,
            status: asset.status.unwrap_or(AssetStatus::Spare),
            operation_state: asset.operation_state.unwrap_or(OperationState::Normal),
            purchase_date: asset.purchase_date,
            supplier: asset.supplier,
            description: asset.description,
            notes: asset.notes,
            location_id: asset.location_id,
            created_at: now,
            updated_at: now,
        };
        inner.assets.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_details(&self, id: Uuid, patch: AssetPatch) -> AppResult<Asset> {
        let mut inner = self.inner.write().await;
        let asset = inner
            .assets
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))?;
        if let Some(tag) = patch.asset_tag {
            asset.asset_tag = Some(tag);
        }
        if let Some(serial) = patch.serial_number {
            asset.serial_number = Some(serial);
        }
        if let Some(date) = patch.purchase_date {
            asset.purchase_date = Some(date);
        }
        if let Some(supplier) = patch.supplier {
            asset.supplier = Some(supplier);
        }
        if let Some(description) = patch.description {
            asset.description = Some(description);
        }
        if let Some(notes) = patch.notes {
            asset.notes = Some(notes);
        }
        if let Some(state) = patch.operation_state {
            asset.operation_state = state;
        }
        asset.updated_at = Utc::now();
        Ok(asset.clone())
    }

    async fn apply_transition(&self, id: Uuid, change: AssetStateChange) -> AppResult<Asset> {
        let mut inner = self.inner.write().await;
        let asset = inner
            .assets
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))?;
        if let Some(status) = change.status {
            asset.status = status;
        }
        if let Some(location_id) = change.location_id {
            asset.location_id = Some(location_id);
        }
        if let Some(state) = change.operation_state {
            asset.operation_state = state;
        }
        asset.updated_at = Utc::now();
        Ok(asset.clone())
    }

    async fn remove(&self, id: Uuid) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.assets.remove(&id).is_some())
    }

    async fn list(
        &self,
        filter: &AssetFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Asset>> {
        let inner = self.inner.read().await;
        let mut matches: Vec<Asset> = inner
            .assets
            .values()
            .filter(|asset| asset_matches(&inner, asset, filter))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        let total = matches.len() as u64;
        let items: Vec<Asset> = matches
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }

    async fn count_by_status(&self) -> AppResult<Vec<StatusCount>> {
        let inner = self.inner.read().await;
        let mut counts: HashMap<AssetStatus, i64> = HashMap::new();
        for asset in inner.assets.values() {
            *counts.entry(asset.status).or_insert(0) += 1;
        }
        let mut rows: Vec<StatusCount> = counts
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect();
        rows.sort_by_key(|row| row.status.as_str());
        Ok(rows)
    }

    async fn count_by_type(&self) -> AppResult<Vec<LabelCount>> {
        let inner = self.inner.read().await;
        let mut counts: HashMap<String, i64> = HashMap::new();
        for asset in inner.assets.values() {
            let Some(model) = inner.asset_models.get(&asset.asset_model_id) else {
                continue;
            };
            let Some(asset_type) = inner.asset_types.get(&model.asset_type_id) else {
                continue;
            };
            *counts.entry(asset_type.name.clone()).or_insert(0) += 1;
        }
        Ok(sorted_label_counts(counts))
    }

    async fn count_by_department(&self) -> AppResult<Vec<LabelCount>> {
        let inner = self.inner.read().await;
        let mut counts: HashMap<String, i64> = HashMap::new();
        for assignment in inner.assignments.iter().filter(|a| a.is_open()) {
            let Some(person) = inner.people.get(&assignment.person_id) else {
                continue;
            };
            let Some(department_id) = person.department_id else {
                continue;
            };
            let Some(unit) = inner.org_units.get(&department_id) else {
                continue;
            };
            *counts.entry(unit.name.clone()).or_insert(0) += 1;
        }
        Ok(sorted_label_counts(counts))
    }
}

/// Whether an asset passes every condition of the filter.
fn asset_matches(inner: &Inner, asset: &Asset, filter: &AssetFilter) -> bool {
    if let Some(status) = filter.status {
        if asset.status != status {
            return false;
        }
    }
    if let Some(type_id) = filter.asset_type_id {
        let belongs = inner
            .asset_models
            .get(&asset.asset_model_id)
            .is_some_and(|model| model.asset_type_id == type_id);
        if !belongs {
            return false;
        }
    }
    if let Some(location_id) = filter.location_id {
        if asset.location_id != Some(location_id) {
            return false;
        }
    }
    if let Some(person_id) = filter.person_id {
        let held = inner
            .assignments
            .iter()
            .any(|a| a.asset_id == asset.id && a.person_id == person_id && a.is_open());
        if !held {
            return false;
        }
    }
    if let Some(search) = filter.search.as_deref() {
        let needle = search.to_lowercase();
        let hit = [&asset.asset_tag, &asset.serial_number, &asset.description]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle));
        if !hit {
            return false;
        }
    }
    true
}

/// Sort aggregation rows the way the SQL queries do: count descending,
/// then label ascending.
fn sorted_label_counts(counts: HashMap<String, i64>) -> Vec<LabelCount> {
    let mut rows: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    rows
}

#[async_trait]
impl AssignmentLedger for MemoryInventory {
    async fn open(&self, assignment: NewAssignment) -> AppResult<Assignment> {
        let mut inner = self.inner.write().await;
        let already_open = inner
            .assignments
            .iter()
            .any(|a| a.asset_id == assignment.asset_id && a.is_open());
        if already_open {
            return Err(AppError::conflict("Asset already has an open assignment"));
        }
        let record = Assignment {
            id: Uuid::new_v4(),
            asset_id: assignment.asset_id,
            person_id: assignment.person_id,
            start_date: Utc::now(),
            end_date: None,
            expected_return_date: assignment.expected_return_date,
            primary_device: assignment.primary_device,
            notes: assignment.notes,
        };
        inner.assignments.push(record.clone());
        Ok(record)
    }

    async fn close_open(
        &self,
        asset_id: Uuid,
        end_date: DateTime<Utc>,
    ) -> AppResult<Option<Assignment>> {
        let mut inner = self.inner.write().await;
        let open = inner
            .assignments
            .iter_mut()
            .find(|a| a.asset_id == asset_id && a.is_open());
        match open {
            Some(assignment) => {
                assignment.end_date = Some(end_date);
                Ok(Some(assignment.clone()))
            }
            None => Ok(None),
        }
    }

    async fn find_open(&self, asset_id: Uuid) -> AppResult<Option<Assignment>> {
        let inner = self.inner.read().await;
        Ok(inner
            .assignments
            .iter()
            .find(|a| a.asset_id == asset_id && a.is_open())
            .cloned())
    }

    async fn list_open_for_person(&self, person_id: Uuid) -> AppResult<Vec<Assignment>> {
        let inner = self.inner.read().await;
        let mut rows: Vec<Assignment> = inner
            .assignments
            .iter()
            .filter(|a| a.person_id == person_id && a.is_open())
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(rows)
    }

    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<Assignment>> {
        let inner = self.inner.read().await;
        let mut rows: Vec<Assignment> = inner
            .assignments
            .iter()
            .filter(|a| a.asset_id == asset_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(rows)
    }

    async fn list_for_person(&self, person_id: Uuid) -> AppResult<Vec<Assignment>> {
        let inner = self.inner.read().await;
        let mut rows: Vec<Assignment> = inner
            .assignments
            .iter()
            .filter(|a| a.person_id == person_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(rows)
    }
}

#[async_trait]
impl RelationshipGraph for MemoryInventory {
    async fn peripherals_of(&self, asset_id: Uuid) -> AppResult<Vec<Asset>> {
        let inner = self.inner.read().await;
        let mut peripherals: Vec<Asset> = inner
            .relationships
            .iter()
            .filter(|edge| edge.parent_asset_id == asset_id)
            .filter_map(|edge| inner.assets.get(&edge.child_asset_id))
            .cloned()
            .collect();
        peripherals.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(peripherals)
    }

    async fn link(
        &self,
        parent_asset_id: Uuid,
        child_asset_id: Uuid,
        relation_type: RelationType,
    ) -> AppResult<AssetRelationship> {
        if parent_asset_id == child_asset_id {
            return Err(AppError::validation(
                "An asset cannot be a peripheral of itself",
            ));
        }
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner.relationships.iter().find(|edge| {
            edge.parent_asset_id == parent_asset_id
                && edge.child_asset_id == child_asset_id
                && edge.relation_type == relation_type
        }) {
            return Ok(existing.clone());
        }
        let record = AssetRelationship {
            id: Uuid::new_v4(),
            parent_asset_id,
            child_asset_id,
            relation_type,
            created_at: Utc::now(),
        };
        inner.relationships.push(record.clone());
        Ok(record)
    }

    async fn unlink_children(&self, parent_asset_id: Uuid) -> AppResult<u64> {
        let mut inner = self.inner.write().await;
        let before = inner.relationships.len();
        inner
            .relationships
            .retain(|edge| edge.parent_asset_id != parent_asset_id);
        Ok((before - inner.relationships.len()) as u64)
    }

    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<AssetRelationship>> {
        let inner = self.inner.read().await;
        Ok(inner
            .relationships
            .iter()
            .filter(|edge| edge.parent_asset_id == asset_id || edge.child_asset_id == asset_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AuditTrail for MemoryInventory {
    async fn append(&self, event: NewAssetEvent) -> AppResult<AssetEvent> {
        let mut inner = self.inner.write().await;
        inner.event_seq += 1;
        let record = AssetEvent {
            id: Uuid::new_v4(),
            asset_id: event.asset_id,
            action: event.action,
            actor: event.actor,
            from_status: event.from_status,
            to_status: event.to_status,
            from_location_id: event.from_location_id,
            to_location_id: event.to_location_id,
            notes: event.notes,
            seq: inner.event_seq,
            created_at: Utc::now(),
        };
        inner.events.push(record.clone());
        Ok(record)
    }

    async fn list_for_asset(&self, asset_id: Uuid) -> AppResult<Vec<AssetEvent>> {
        let inner = self.inner.read().await;
        let mut rows: Vec<AssetEvent> = inner
            .events
            .iter()
            .filter(|event| event.asset_id == asset_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.seq.cmp(&a.seq)));
        Ok(rows)
    }
}

#[async_trait]
impl PersonDirectory for MemoryInventory {
    async fn get(&self, id: Uuid) -> AppResult<Option<Person>> {
        let inner = self.inner.read().await;
        Ok(inner.people.get(&id).cloned())
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.people.contains_key(&id))
    }

    async fn insert(&self, person: NewPerson) -> AppResult<Person> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();
        let record = Person {
            id: Uuid::new_v4(),
            full_name: person.full_name,
            username: person.username,
            email: person.email,
            company: person.company,
            department_id: person.department_id,
            reports_to_id: person.reports_to_id,
            created_at: now,
            updated_at: now,
        };
        inner.people.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, patch: PersonPatch) -> AppResult<Person> {
        let mut inner = self.inner.write().await;
        let person = inner
            .people
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Person {id} not found")))?;
        if let Some(full_name) = patch.full_name {
            person.full_name = full_name;
        }
        if let Some(username) = patch.username {
            person.username = Some(username);
        }
        if let Some(email) = patch.email {
            person.email = Some(email);
        }
        if let Some(company) = patch.company {
            person.company = Some(company);
        }
        if let Some(department_id) = patch.department_id {
            person.department_id = Some(department_id);
        }
        if let Some(reports_to_id) = patch.reports_to_id {
            person.reports_to_id = Some(reports_to_id);
        }
        person.updated_at = Utc::now();
        Ok(person.clone())
    }

    async fn remove(&self, id: Uuid) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.people.remove(&id).is_some())
    }

    async fn list(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Person>> {
        let inner = self.inner.read().await;
        let needle = search.map(str::to_lowercase);
        let mut matches: Vec<Person> = inner
            .people
            .values()
            .filter(|person| match needle.as_deref() {
                Some(needle) => {
                    person.full_name.to_lowercase().contains(needle)
                        || person
                            .username
                            .as_deref()
                            .is_some_and(|u| u.to_lowercase().contains(needle))
                }
                None => true,
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.full_name.cmp(&b.full_name).then(a.id.cmp(&b.id)));
        let total = matches.len() as u64;
        let items: Vec<Person> = matches
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }
}

#[async_trait]
impl OrgUnitDirectory for MemoryInventory {
    async fn get(&self, id: Uuid) -> AppResult<Option<OrganisationUnit>> {
        let inner = self.inner.read().await;
        Ok(inner.org_units.get(&id).cloned())
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.org_units.contains_key(&id))
    }

    async fn insert(&self, unit: NewOrganisationUnit) -> AppResult<OrganisationUnit> {
        let mut inner = self.inner.write().await;
        let record = OrganisationUnit {
            id: Uuid::new_v4(),
            name: unit.name,
            category: unit.category,
            description: unit.description,
            created_at: Utc::now(),
        };
        inner.org_units.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, patch: OrgUnitPatch) -> AppResult<OrganisationUnit> {
        let mut inner = self.inner.write().await;
        let unit = inner
            .org_units
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Organisation unit {id} not found")))?;
        if let Some(name) = patch.name {
            unit.name = name;
        }
        if let Some(category) = patch.category {
            unit.category = category;
        }
        if let Some(description) = patch.description {
            unit.description = Some(description);
        }
        Ok(unit.clone())
    }

    async fn remove(&self, id: Uuid) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.org_units.remove(&id).is_some())
    }

    async fn list(&self) -> AppResult<Vec<OrganisationUnit>> {
        let inner = self.inner.read().await;
        let mut rows: Vec<OrganisationUnit> = inner.org_units.values().cloned().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }
}

#[async_trait]
impl CatalogStore for MemoryInventory {
    async fn get_type(&self, id: Uuid) -> AppResult<Option<AssetType>> {
        let inner = self.inner.read().await;
        Ok(inner.asset_types.get(&id).cloned())
    }

    async fn insert_type(&self, asset_type: NewAssetType) -> AppResult<AssetType> {
        let mut inner = self.inner.write().await;
        if inner
            .asset_types
            .values()
            .any(|t| t.name == asset_type.name)
        {
            return Err(AppError::conflict(format!(
                "Asset type '{}' already exists",
                asset_type.name
            )));
        }
        let record = AssetType {
            id: Uuid::new_v4(),
            name: asset_type.name,
            category: asset_type.category,
            description: asset_type.description,
            created_at: Utc::now(),
        };
        inner.asset_types.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_type(&self, id: Uuid, patch: AssetTypePatch) -> AppResult<AssetType> {
        let mut inner = self.inner.write().await;
        let asset_type = inner
            .asset_types
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Asset type {id} not found")))?;
        if let Some(name) = patch.name {
            asset_type.name = name;
        }
        if let Some(category) = patch.category {
            asset_type.category = Some(category);
        }
        if let Some(description) = patch.description {
            asset_type.description = Some(description);
        }
        Ok(asset_type.clone())
    }

    async fn remove_type(&self, id: Uuid) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.asset_types.remove(&id).is_some())
    }

    async fn list_types(&self) -> AppResult<Vec<AssetType>> {
        let inner = self.inner.read().await;
        let mut rows: Vec<AssetType> = inner.asset_types.values().cloned().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn get_model(&self, id: Uuid) -> AppResult<Option<AssetModelInfo>> {
        let inner = self.inner.read().await;
        Ok(inner.asset_models.get(&id).cloned())
    }

    async fn model_exists(&self, id: Uuid) -> AppResult<bool> {
        let inner = self.inner.read().await;
        Ok(inner.asset_models.contains_key(&id))
    }

    async fn insert_model(&self, model: NewAssetModelInfo) -> AppResult<AssetModelInfo> {
        let mut inner = self.inner.write().await;
        if inner
            .asset_models
            .values()
            .any(|m| m.manufacturer == model.manufacturer && m.model_number == model.model_number)
        {
            return Err(AppError::conflict(format!(
                "Asset model '{} {}' already exists",
                model.manufacturer, model.model_number
            )));
        }
        let record = AssetModelInfo {
            id: Uuid::new_v4(),
            manufacturer: model.manufacturer,
            model_number: model.model_number,
            asset_type_id: model.asset_type_id,
            default_description: model.default_description,
            created_at: Utc::now(),
        };
        inner.asset_models.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_model(&self, id: Uuid, patch: AssetModelPatch) -> AppResult<AssetModelInfo> {
        let mut inner = self.inner.write().await;
        let model = inner
            .asset_models
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Asset model {id} not found")))?;
        if let Some(manufacturer) = patch.manufacturer {
            model.manufacturer = manufacturer;
        }
        if let Some(model_number) = patch.model_number {
            model.model_number = model_number;
        }
        if let Some(asset_type_id) = patch.asset_type_id {
            model.asset_type_id = asset_type_id;
        }
        if let Some(default_description) = patch.default_description {
            model.default_description = Some(default_description);
        }
        Ok(model.clone())
    }

    async fn remove_model(&self, id: Uuid) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        Ok(inner.asset_models.remove(&id).is_some())
    }

    async fn list_models(&self) -> AppResult<Vec<AssetModelInfo>> {
        let inner = self.inner.read().await;
        let mut rows: Vec<AssetModelInfo> = inner.asset_models.values().cloned().collect();
        rows.sort_by(|a, b| {
            a.manufacturer
                .cmp(&b.manufacturer)
                .then_with(|| a.model_number.cmp(&b.model_number))
        });
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assethub_core::error::ErrorKind;

    fn new_asset(model_id: Uuid) -> NewAsset {
        NewAsset {
            asset_tag: Some("AH-0001".into()),
            serial_number: None,
            asset_model_id: model_id,
            status: None,
            operation_state: None,
            purchase_date: None,
            supplier: None,
            description: None,
            notes: None,
            location_id: None,
        }
    }

    #[tokio::test]
    async fn insert_defaults_to_spare() {
        let store = MemoryInventory::new();
        let asset = AssetRegistry::insert(&store, new_asset(Uuid::new_v4()))
            .await
            .unwrap();
        assert_eq!(asset.status, AssetStatus::Spare);
        assert_eq!(asset.operation_state, OperationState::Normal);
    }

    #[tokio::test]
    async fn second_open_assignment_conflicts() {
        let store = MemoryInventory::new();
        let asset_id = Uuid::new_v4();
        let first = NewAssignment {
            asset_id,
            person_id: Uuid::new_v4(),
            expected_return_date: None,
            primary_device: true,
            notes: None,
        };
        AssignmentLedger::open(&store, first.clone()).await.unwrap();
        let err = AssignmentLedger::open(&store, first).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn close_open_is_a_noop_without_open_assignment() {
        let store = MemoryInventory::new();
        let closed = store.close_open(Uuid::new_v4(), Utc::now()).await.unwrap();
        assert!(closed.is_none());
    }

    #[tokio::test]
    async fn link_is_idempotent() {
        let store = MemoryInventory::new();
        let parent = Uuid::new_v4();
        let child = Uuid::new_v4();
        let first = store
            .link(parent, child, RelationType::PeripheralOf)
            .await
            .unwrap();
        let second = store
            .link(parent, child, RelationType::PeripheralOf)
            .await
            .unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(store.unlink_children(parent).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn events_are_sequenced() {
        let store = MemoryInventory::new();
        let asset_id = Uuid::new_v4();
        for _ in 0..3 {
            AuditTrail::append(
                &store,
                NewAssetEvent {
                    asset_id,
                    action: assethub_entity::event::EventAction::Move,
                    actor: None,
                    from_status: None,
                    to_status: None,
                    from_location_id: None,
                    to_location_id: None,
                    notes: None,
                },
            )
            .await
            .unwrap();
        }
        let events = AuditTrail::list_for_asset(&store, asset_id).await.unwrap();
        assert_eq!(events.len(), 3);
        assert!(events.windows(2).all(|w| w[0].seq > w[1].seq));
    }
}
