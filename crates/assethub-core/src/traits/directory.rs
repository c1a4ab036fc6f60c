//! Person and organisation unit directory traits.

use async_trait::async_trait;
use uuid::Uuid;

use assethub_entity::org_unit::{NewOrganisationUnit, OrgUnitPatch, OrganisationUnit};
use assethub_entity::person::{NewPerson, Person, PersonPatch};

use crate::result::AppResult;
use crate::types::pagination::{PageRequest, PageResponse};

/// Storage of person reference data.
#[async_trait]
pub trait PersonDirectory: Send + Sync {
    /// Fetch a person by id.
    async fn get(&self, id: Uuid) -> AppResult<Option<Person>>;

    /// Whether a person with this id exists.
    async fn exists(&self, id: Uuid) -> AppResult<bool>;

    /// Register a new person.
    async fn insert(&self, person: NewPerson) -> AppResult<Person>;

    /// Update person fields. Fails with `NotFound` for unknown ids.
    async fn update(&self, id: Uuid, patch: PersonPatch) -> AppResult<Person>;

    /// Delete a person. Returns `false` when the id was unknown.
    async fn remove(&self, id: Uuid) -> AppResult<bool>;

    /// List people, optionally filtered by a case-insensitive name/username
    /// search, paginated.
    async fn list(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Person>>;
}

/// Storage of organisation unit reference data.
#[async_trait]
pub trait OrgUnitDirectory: Send + Sync {
    /// Fetch a unit by id.
    async fn get(&self, id: Uuid) -> AppResult<Option<OrganisationUnit>>;

    /// Whether a unit with this id exists.
    async fn exists(&self, id: Uuid) -> AppResult<bool>;

    /// Register a new unit.
    async fn insert(&self, unit: NewOrganisationUnit) -> AppResult<OrganisationUnit>;

    /// Update unit fields. Fails with `NotFound` for unknown ids.
    async fn update(&self, id: Uuid, patch: OrgUnitPatch) -> AppResult<OrganisationUnit>;

    /// Delete a unit. Returns `false` when the id was unknown.
    async fn remove(&self, id: Uuid) -> AppResult<bool>;

    /// List all units, name-ordered.
    async fn list(&self) -> AppResult<Vec<OrganisationUnit>>;
}
