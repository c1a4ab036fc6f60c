//! Organisation unit reference data.

pub mod model;

pub use model::{NewOrganisationUnit, OrgUnitCategory, OrgUnitPatch, OrganisationUnit};
