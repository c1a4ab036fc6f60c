//! People management and per-person assignment history.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::{AssetRegistry, AssignmentLedger, OrgUnitDirectory, PersonDirectory};
use assethub_core::types::pagination::{PageRequest, PageResponse};
use assethub_entity::asset::AssetStatus;
use assethub_entity::assignment::Assignment;
use assethub_entity::person::{NewPerson, Person, PersonPatch};

/// Compact asset view embedded in assignment history entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSummary {
    /// The asset id.
    pub id: Uuid,
    /// Inventory tag.
    pub asset_tag: Option<String>,
    /// Serial number.
    pub serial_number: Option<String>,
    /// Current lifecycle status.
    pub status: AssetStatus,
}

/// One assignment with its asset resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonAssignment {
    /// The assignment record.
    pub assignment: Assignment,
    /// Summary of the assigned asset, when it still exists.
    pub asset: Option<AssetSummary>,
}

/// Handles person reference data and assignment history lookups.
pub struct PersonService {
    people: Arc<dyn PersonDirectory>,
    ledger: Arc<dyn AssignmentLedger>,
    assets: Arc<dyn AssetRegistry>,
    org_units: Arc<dyn OrgUnitDirectory>,
}

impl PersonService {
    /// Create a new person service.
    pub fn new(
        people: Arc<dyn PersonDirectory>,
        ledger: Arc<dyn AssignmentLedger>,
        assets: Arc<dyn AssetRegistry>,
        org_units: Arc<dyn OrgUnitDirectory>,
    ) -> Self {
        Self {
            people,
            ledger,
            assets,
            org_units,
        }
    }

    /// Register a new person.
    pub async fn create(&self, new_person: NewPerson) -> AppResult<Person> {
        if new_person.full_name.trim().is_empty() {
            return Err(AppError::validation("Full name cannot be empty"));
        }
        if let Some(department_id) = new_person.department_id {
            if !self.org_units.exists(department_id).await? {
                return Err(AppError::validation(format!(
                    "Organisation unit {department_id} does not exist"
                )));
            }
        }
        let person = self.people.insert(new_person).await?;
        info!(person_id = %person.id, "registered person");
        Ok(person)
    }

    /// Fetch a person by id.
    pub async fn get(&self, id: Uuid) -> AppResult<Person> {
        self.people
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Person {id} not found")))
    }

    /// Update person fields.
    pub async fn patch(&self, id: Uuid, patch: PersonPatch) -> AppResult<Person> {
        if let Some(full_name) = &patch.full_name {
            if full_name.trim().is_empty() {
                return Err(AppError::validation("Full name cannot be empty"));
            }
        }
        self.people.update(id, patch).await
    }

    /// Delete a person. Rejected while the person still holds assets.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let held = self.ledger.list_open_for_person(id).await?;
        if !held.is_empty() {
            return Err(AppError::conflict(format!(
                "Person still holds {} assigned asset(s); offboard them first",
                held.len()
            )));
        }
        if self.people.remove(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Person {id} not found")))
        }
    }

    /// List people, optionally filtered by a name/username search.
    pub async fn list(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Person>> {
        self.people.list(search, page).await
    }

    /// Full assignment history of a person, newest first, with the
    /// assets summarized.
    pub async fn assignments(&self, person_id: Uuid) -> AppResult<Vec<PersonAssignment>> {
        self.get(person_id).await?;
        let history = self.ledger.list_for_person(person_id).await?;
        let mut entries = Vec::with_capacity(history.len());
        for assignment in history {
            let asset = self
                .assets
                .get(assignment.asset_id)
                .await?
                .map(|asset| AssetSummary {
                    id: asset.id,
                    asset_tag: asset.asset_tag,
                    serial_number: asset.serial_number,
                    status: asset.status,
                });
            entries.push(PersonAssignment { assignment, asset });
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use assethub_core::error::ErrorKind;
    use assethub_core::traits::AssignmentLedger;
    use assethub_core::types::pagination::PageRequest;
    use assethub_database::MemoryInventory;
    use assethub_entity::assignment::NewAssignment;
    use assethub_entity::person::{NewPerson, PersonPatch};

    use super::PersonService;

    fn service() -> (PersonService, Arc<MemoryInventory>) {
        let store = Arc::new(MemoryInventory::new());
        (
            PersonService::new(store.clone(), store.clone(), store.clone(), store.clone()),
            store,
        )
    }

    fn person(name: &str) -> NewPerson {
        NewPerson {
            full_name: name.into(),
            username: None,
            email: None,
            company: None,
            department_id: None,
            reports_to_id: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_blank_names() {
        let (service, _store) = service();
        let err = service.create(person("   ")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn search_matches_names_case_insensitively() {
        let (service, _store) = service();
        service.create(person("Grace Hopper")).await.unwrap();
        service.create(person("Alan Turing")).await.unwrap();

        let page = service
            .list(Some("grace"), &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].full_name, "Grace Hopper");
    }

    #[tokio::test]
    async fn delete_is_blocked_while_assets_are_held() {
        let (service, store) = service();
        let holder = service.create(person("Grace Hopper")).await.unwrap();
        store
            .open(NewAssignment {
                asset_id: Uuid::new_v4(),
                person_id: holder.id,
                expected_return_date: None,
                primary_device: true,
                notes: None,
            })
            .await
            .unwrap();

        let err = service.delete(holder.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        store.close_open(
            store.list_open_for_person(holder.id).await.unwrap()[0].asset_id,
            chrono::Utc::now(),
        )
        .await
        .unwrap();
        service.delete(holder.id).await.unwrap();
    }

    #[tokio::test]
    async fn patch_updates_fields() {
        let (service, _store) = service();
        let created = service.create(person("Grace Hopper")).await.unwrap();
        let updated = service
            .patch(
                created.id,
                PersonPatch {
                    email: Some("grace@example.com".into()),
                    ..PersonPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.email.as_deref(), Some("grace@example.com"));
    }
}
