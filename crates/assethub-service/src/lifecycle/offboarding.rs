//! Offboarding orchestrator: releases every asset held by a person.

use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::{AssignmentLedger, PersonDirectory};
use assethub_entity::asset::Asset;
use assethub_entity::lifecycle::Disposition;

use super::cascade::{CascadeRunner, PeripheralOutcome};
use super::engine::TransitionRequest;

/// Per-asset deviation from the offboarding defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetOverride {
    /// The asset the override applies to.
    pub asset_id: Uuid,
    /// Disposition for this asset.
    pub disposition: Disposition,
    /// Destination, falling back to the request default when absent.
    pub target_location_id: Option<Uuid>,
    /// Notes, falling back to the request default when absent.
    pub notes: Option<String>,
}

/// An offboarding request for one person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffboardingRequest {
    /// Default disposition for every held asset.
    pub disposition: Disposition,
    /// Default destination location.
    pub target_location_id: Option<Uuid>,
    /// Default notes, copied onto every audit event.
    pub notes: Option<String>,
    /// Who triggered the offboarding.
    pub actor: Option<String>,
    /// Per-asset deviations. Overrides naming assets the person does not
    /// currently hold are ignored.
    #[serde(default)]
    pub overrides: Vec<AssetOverride>,
}

/// What happened to one held asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum OffboardOutcome {
    /// The disposition was applied; peripherals report individually.
    Completed {
        asset: Asset,
        peripherals: Vec<PeripheralOutcome>,
    },
    /// The disposition failed; other assets were unaffected.
    Failed { kind: ErrorKind, message: String },
}

/// Per-asset entry in an offboarding report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffboardedAsset {
    /// The asset the entry is about.
    pub asset_id: Uuid,
    /// What happened to it.
    #[serde(flatten)]
    pub outcome: OffboardOutcome,
}

/// Result of one offboarding run.
///
/// Partial failure is a normal result shape: the report always lists
/// every held asset, succeeded or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffboardingReport {
    /// The offboarded person.
    pub person_id: Uuid,
    /// Updated snapshots of the assets whose disposition succeeded.
    pub processed_assets: Vec<Asset>,
    /// Per-asset outcomes, one per held asset.
    pub results: Vec<OffboardedAsset>,
}

/// Releases all assets held by a departing person in one call.
pub struct OffboardingService {
    cascade: Arc<CascadeRunner>,
    ledger: Arc<dyn AssignmentLedger>,
    people: Arc<dyn PersonDirectory>,
}

impl OffboardingService {
    /// Create a new orchestrator.
    pub fn new(
        cascade: Arc<CascadeRunner>,
        ledger: Arc<dyn AssignmentLedger>,
        people: Arc<dyn PersonDirectory>,
    ) -> Self {
        Self {
            cascade,
            ledger,
            people,
        }
    }

    /// Apply the requested dispositions to every asset the person holds.
    ///
    /// Assets fan out concurrently; peripherals follow their primary
    /// through the cascade. One asset's failure never aborts the others.
    pub async fn offboard(
        &self,
        person_id: Uuid,
        request: OffboardingRequest,
    ) -> AppResult<OffboardingReport> {
        if !self.people.exists(person_id).await? {
            return Err(AppError::not_found(format!("Person {person_id} not found")));
        }

        let held = self.ledger.list_open_for_person(person_id).await?;
        if held.is_empty() {
            return Ok(OffboardingReport {
                person_id,
                processed_assets: Vec::new(),
                results: Vec::new(),
            });
        }

        let mut handles = Vec::with_capacity(held.len());
        for assignment in &held {
            let asset_id = assignment.asset_id;
            let transition = plan_for_asset(asset_id, &request);
            let cascade = self.cascade.clone();
            handles.push(tokio::spawn(async move {
                cascade.dispatch(asset_id, &transition).await
            }));
        }

        let mut processed_assets = Vec::new();
        let mut results = Vec::with_capacity(held.len());
        for (assignment, joined) in held.iter().zip(join_all(handles).await) {
            let outcome = match joined {
                Ok(Ok(cascaded)) => {
                    processed_assets.push(cascaded.primary.clone());
                    OffboardOutcome::Completed {
                        asset: cascaded.primary,
                        peripherals: cascaded.peripherals,
                    }
                }
                Ok(Err(err)) => OffboardOutcome::Failed {
                    kind: err.kind,
                    message: err.message,
                },
                Err(join_err) => OffboardOutcome::Failed {
                    kind: ErrorKind::Internal,
                    message: format!("Offboarding task failed: {join_err}"),
                },
            };
            results.push(OffboardedAsset {
                asset_id: assignment.asset_id,
                outcome,
            });
        }

        info!(
            person_id = %person_id,
            held = results.len(),
            succeeded = processed_assets.len(),
            "offboarded person"
        );
        Ok(OffboardingReport {
            person_id,
            processed_assets,
            results,
        })
    }
}

/// Resolve the effective transition for one held asset: the override's
/// disposition when one names the asset, the request defaults otherwise.
fn plan_for_asset(asset_id: Uuid, request: &OffboardingRequest) -> TransitionRequest {
    let matched = request.overrides.iter().find(|o| o.asset_id == asset_id);
    let disposition = matched.map_or(request.disposition, |o| o.disposition);
    let target_location_id = matched
        .and_then(|o| o.target_location_id)
        .or(request.target_location_id);
    let notes = matched
        .and_then(|o| o.notes.clone())
        .or_else(|| request.notes.clone());

    TransitionRequest {
        action: disposition.action(),
        person_id: None,
        target_location_id,
        expected_return_date: None,
        primary_device: false,
        notes,
        actor: request.actor.clone(),
        peripherals: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use assethub_core::error::ErrorKind;
    use assethub_core::traits::{AssetRegistry, AssignmentLedger};
    use assethub_entity::asset::AssetStatus;
    use assethub_entity::lifecycle::Disposition;

    use super::{AssetOverride, OffboardingRequest};
    use crate::lifecycle::testkit::{deploy_to, Fixture};
    use crate::lifecycle::OffboardOutcome;

    fn offboard_as(disposition: Disposition) -> OffboardingRequest {
        OffboardingRequest {
            disposition,
            target_location_id: None,
            notes: None,
            actor: Some("it-admin".into()),
            overrides: Vec::new(),
        }
    }

    #[tokio::test]
    async fn default_disposition_returns_every_held_asset() {
        let fx = Fixture::new();
        let person = fx.person().await;
        let laptop = fx.asset(AssetStatus::Spare).await;
        let phone = fx.asset(AssetStatus::Spare).await;
        fx.engine.apply(laptop.id, &deploy_to(person.id)).await.unwrap();
        fx.engine.apply(phone.id, &deploy_to(person.id)).await.unwrap();

        let report = fx
            .offboarding
            .offboard(person.id, offboard_as(Disposition::Spare))
            .await
            .unwrap();

        assert_eq!(report.person_id, person.id);
        assert_eq!(report.processed_assets.len(), 2);
        assert_eq!(report.results.len(), 2);
        for result in &report.results {
            assert!(matches!(result.outcome, OffboardOutcome::Completed { .. }));
        }
        for id in [laptop.id, phone.id] {
            let asset = fx.store.get(id).await.unwrap().unwrap();
            assert_eq!(asset.status, AssetStatus::Spare);
            assert!(fx.store.find_open(id).await.unwrap().is_none());
        }
        assert!(fx
            .store
            .list_open_for_person(person.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn overrides_divert_individual_assets() {
        let fx = Fixture::new();
        let person = fx.person().await;
        let keeper = fx.asset(AssetStatus::Spare).await;
        let scrap = fx.asset(AssetStatus::Spare).await;
        fx.engine.apply(keeper.id, &deploy_to(person.id)).await.unwrap();
        fx.engine.apply(scrap.id, &deploy_to(person.id)).await.unwrap();

        let mut request = offboard_as(Disposition::Spare);
        request.overrides.push(AssetOverride {
            asset_id: scrap.id,
            disposition: Disposition::Retire,
            target_location_id: None,
            notes: Some("water damage".into()),
        });

        let report = fx.offboarding.offboard(person.id, request).await.unwrap();
        assert_eq!(report.processed_assets.len(), 2);

        let kept = fx.store.get(keeper.id).await.unwrap().unwrap();
        assert_eq!(kept.status, AssetStatus::Spare);
        let retired = fx.store.get(scrap.id).await.unwrap().unwrap();
        assert_eq!(retired.status, AssetStatus::Retired);
    }

    #[tokio::test]
    async fn override_for_an_unheld_asset_is_ignored() {
        let fx = Fixture::new();
        let person = fx.person().await;
        let held = fx.asset(AssetStatus::Spare).await;
        let unrelated = fx.asset(AssetStatus::Spare).await;
        fx.engine.apply(held.id, &deploy_to(person.id)).await.unwrap();

        let mut request = offboard_as(Disposition::Spare);
        request.overrides.push(AssetOverride {
            asset_id: unrelated.id,
            disposition: Disposition::Retire,
            target_location_id: None,
            notes: None,
        });

        let report = fx.offboarding.offboard(person.id, request).await.unwrap();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].asset_id, held.id);

        let untouched = fx.store.get(unrelated.id).await.unwrap().unwrap();
        assert_eq!(untouched.status, AssetStatus::Spare);
    }

    #[tokio::test]
    async fn person_without_assets_gets_an_empty_report() {
        let fx = Fixture::new();
        let person = fx.person().await;

        let report = fx
            .offboarding
            .offboard(person.id, offboard_as(Disposition::Retire))
            .await
            .unwrap();
        assert!(report.processed_assets.is_empty());
        assert!(report.results.is_empty());
    }

    #[tokio::test]
    async fn unknown_person_is_not_found() {
        let fx = Fixture::new();
        let err = fx
            .offboarding
            .offboard(Uuid::new_v4(), offboard_as(Disposition::Spare))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn repair_disposition_sends_assets_to_repair() {
        let fx = Fixture::new();
        let person = fx.person().await;
        let vendor = fx.warehouse().await;
        let laptop = fx.asset(AssetStatus::Spare).await;
        fx.engine.apply(laptop.id, &deploy_to(person.id)).await.unwrap();

        let mut request = offboard_as(Disposition::Repair);
        request.target_location_id = Some(vendor.id);

        let report = fx.offboarding.offboard(person.id, request).await.unwrap();
        assert_eq!(report.processed_assets.len(), 1);
        let asset = &report.processed_assets[0];
        assert_eq!(asset.status, AssetStatus::Repair);
        assert_eq!(asset.location_id, Some(vendor.id));
    }
}
