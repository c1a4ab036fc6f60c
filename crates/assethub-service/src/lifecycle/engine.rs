//! The transition engine — sole writer of asset lifecycle state.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::{
    AssetRegistry, AssignmentLedger, AuditTrail, OrgUnitDirectory, PersonDirectory,
};
use assethub_entity::asset::{Asset, AssetStateChange, OperationState};
use assethub_entity::assignment::NewAssignment;
use assethub_entity::event::NewAssetEvent;
use assethub_entity::lifecycle::LifecycleAction;

use super::locks::AssetLocks;

/// One requested lifecycle transition on one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// The lifecycle action to apply.
    pub action: LifecycleAction,
    /// Receiving person. Required by `deploy`, ignored otherwise.
    pub person_id: Option<Uuid>,
    /// Destination location. Required by `move`, optional otherwise.
    pub target_location_id: Option<Uuid>,
    /// Expected return date for the opened assignment (`deploy` only).
    pub expected_return_date: Option<NaiveDate>,
    /// Whether the opened assignment marks the person's primary device.
    pub primary_device: bool,
    /// Free-form notes, copied onto the audit event.
    pub notes: Option<String>,
    /// Who triggered the action.
    pub actor: Option<String>,
    /// Peripherals to deploy alongside the primary (`deploy` only).
    pub peripherals: Vec<Uuid>,
}

impl TransitionRequest {
    /// Derive the request applied to one peripheral of this request's
    /// asset: same action, location, and notes, but never a primary
    /// device and never a further peripheral list.
    pub fn for_peripheral(&self) -> Self {
        Self {
            primary_device: false,
            peripherals: Vec::new(),
            ..self.clone()
        }
    }
}

/// Applies lifecycle transitions atomically per asset.
///
/// The engine validates before it writes: a rejected request leaves no
/// partial mutation. Side effects run in a fixed order — assignment
/// close/open, then the asset state write, then the audit append — under
/// the asset's keyed lock.
pub struct TransitionEngine {
    assets: Arc<dyn AssetRegistry>,
    ledger: Arc<dyn AssignmentLedger>,
    people: Arc<dyn PersonDirectory>,
    org_units: Arc<dyn OrgUnitDirectory>,
    audit: Arc<dyn AuditTrail>,
    locks: AssetLocks,
}

impl TransitionEngine {
    /// Create a new engine over the given registries.
    pub fn new(
        assets: Arc<dyn AssetRegistry>,
        ledger: Arc<dyn AssignmentLedger>,
        people: Arc<dyn PersonDirectory>,
        org_units: Arc<dyn OrgUnitDirectory>,
        audit: Arc<dyn AuditTrail>,
    ) -> Self {
        Self {
            assets,
            ledger,
            people,
            org_units,
            audit,
            locks: AssetLocks::new(),
        }
    }

    /// The keyed lock map, shared with callers that need to serialize
    /// against in-flight transitions.
    pub fn locks(&self) -> &AssetLocks {
        &self.locks
    }

    /// Apply one lifecycle transition to one asset.
    ///
    /// Returns the updated asset snapshot. Holds the asset's lock for
    /// the whole read-validate-write-audit sequence.
    pub async fn apply(&self, asset_id: Uuid, request: &TransitionRequest) -> AppResult<Asset> {
        let _guard = self.locks.acquire(asset_id).await;

        let asset = self
            .assets
            .get(asset_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Asset {asset_id} not found")))?;

        let action = request.action;
        if !action.allowed_from(asset.status) {
            return Err(AppError::invalid_transition(format!(
                "Action '{action}' is not allowed from status '{}'",
                asset.status
            )));
        }
        self.check_required_fields(request)?;
        self.check_references(request).await?;

        // All validation passed; from here on every write must happen.
        if action.closes_assignment() {
            self.ledger.close_open(asset_id, Utc::now()).await?;
        }
        if action == LifecycleAction::Deploy {
            // person_id presence was checked above.
            if let Some(person_id) = request.person_id {
                self.ledger
                    .open(NewAssignment {
                        asset_id,
                        person_id,
                        expected_return_date: request.expected_return_date,
                        primary_device: request.primary_device,
                        notes: request.notes.clone(),
                    })
                    .await?;
            }
        }

        let change = AssetStateChange {
            status: action
                .changes_status()
                .then(|| action.resulting_status(asset.status)),
            location_id: request.target_location_id,
            operation_state: (action == LifecycleAction::Retire)
                .then_some(OperationState::Decommissioned),
        };
        let updated = self.assets.apply_transition(asset_id, change).await?;

        let (from_status, to_status) = if action.changes_status() {
            (Some(asset.status), Some(updated.status))
        } else {
            (None, None)
        };
        self.audit
            .append(NewAssetEvent {
                asset_id,
                action: action.event_action(),
                actor: request.actor.clone(),
                from_status,
                to_status,
                from_location_id: asset.location_id,
                to_location_id: updated.location_id,
                notes: request.notes.clone(),
            })
            .await?;

        info!(
            asset_id = %asset_id,
            action = %action,
            from = %asset.status,
            to = %updated.status,
            "applied lifecycle transition"
        );
        Ok(updated)
    }

    /// Enforce action-specific required parameters.
    fn check_required_fields(&self, request: &TransitionRequest) -> AppResult<()> {
        match request.action {
            LifecycleAction::Deploy if request.person_id.is_none() => Err(
                AppError::missing_field("Action 'deploy' requires 'person_id'"),
            ),
            LifecycleAction::Move if request.target_location_id.is_none() => Err(
                AppError::missing_field("Action 'move' requires 'target_location_id'"),
            ),
            _ => Ok(()),
        }
    }

    /// Resolve referenced person and location before any write.
    async fn check_references(&self, request: &TransitionRequest) -> AppResult<()> {
        if request.action == LifecycleAction::Deploy {
            if let Some(person_id) = request.person_id {
                if !self.people.exists(person_id).await? {
                    return Err(AppError::not_found(format!("Person {person_id} not found")));
                }
            }
        }
        if let Some(location_id) = request.target_location_id {
            if !self.org_units.exists(location_id).await? {
                return Err(AppError::not_found(format!(
                    "Organisation unit {location_id} not found"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::Barrier;
    use uuid::Uuid;

    use assethub_core::error::ErrorKind;
    use assethub_core::traits::{AssetRegistry, AssignmentLedger, AuditTrail};
    use assethub_entity::asset::{AssetStatus, OperationState};
    use assethub_entity::event::EventAction;
    use assethub_entity::lifecycle::LifecycleAction;

    use crate::lifecycle::testkit::{deploy_to, request, Fixture};

    #[tokio::test]
    async fn deploy_activates_and_opens_a_primary_assignment() {
        let fx = Fixture::new();
        let asset = fx.asset(AssetStatus::Spare).await;
        let person = fx.person().await;

        let updated = fx.engine.apply(asset.id, &deploy_to(person.id)).await.unwrap();
        assert_eq!(updated.status, AssetStatus::Active);

        let open = fx.store.find_open(asset.id).await.unwrap().unwrap();
        assert_eq!(open.person_id, person.id);
        assert!(open.primary_device);

        let events = AuditTrail::list_for_asset(fx.store.as_ref(), asset.id)
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, EventAction::Deploy);
        assert_eq!(events[0].from_status, Some(AssetStatus::Spare));
        assert_eq!(events[0].to_status, Some(AssetStatus::Active));
    }

    #[tokio::test]
    async fn deploy_without_person_fails_without_any_mutation() {
        let fx = Fixture::new();
        let asset = fx.asset(AssetStatus::Spare).await;

        let err = fx
            .engine
            .apply(asset.id, &request(LifecycleAction::Deploy))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingField);

        let untouched = fx.store.get(asset.id).await.unwrap().unwrap();
        assert_eq!(untouched.status, AssetStatus::Spare);
        assert!(fx.store.find_open(asset.id).await.unwrap().is_none());
        assert!(AuditTrail::list_for_asset(fx.store.as_ref(), asset.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn deploy_to_unknown_person_fails_without_any_mutation() {
        let fx = Fixture::new();
        let asset = fx.asset(AssetStatus::Spare).await;

        let err = fx
            .engine
            .apply(asset.id, &deploy_to(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(fx.store.find_open(asset.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn retired_assets_reject_every_action() {
        let fx = Fixture::new();
        let person = fx.person().await;
        let warehouse = fx.warehouse().await;
        let asset = fx.asset(AssetStatus::Retired).await;

        for req in [
            deploy_to(person.id),
            request(LifecycleAction::Return),
            request(LifecycleAction::Repair),
            request(LifecycleAction::Retire),
            crate::lifecycle::TransitionRequest {
                target_location_id: Some(warehouse.id),
                ..request(LifecycleAction::Move)
            },
        ] {
            let err = fx.engine.apply(asset.id, &req).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidTransition, "{}", req.action);
        }
    }

    #[tokio::test]
    async fn return_closes_the_assignment_and_records_one_event() {
        let fx = Fixture::new();
        let asset = fx.asset(AssetStatus::Spare).await;
        let person = fx.person().await;
        fx.engine.apply(asset.id, &deploy_to(person.id)).await.unwrap();

        let updated = fx
            .engine
            .apply(asset.id, &request(LifecycleAction::Return))
            .await
            .unwrap();
        assert_eq!(updated.status, AssetStatus::Spare);
        assert!(fx.store.find_open(asset.id).await.unwrap().is_none());

        let history = AssignmentLedger::list_for_asset(fx.store.as_ref(), asset.id)
            .await
            .unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].end_date.is_some());

        let events = AuditTrail::list_for_asset(fx.store.as_ref(), asset.id)
            .await
            .unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].action, EventAction::Return);
        assert_eq!(events[0].from_status, Some(AssetStatus::Active));
        assert_eq!(events[0].to_status, Some(AssetStatus::Spare));
    }

    #[tokio::test]
    async fn return_without_open_assignment_still_succeeds() {
        let fx = Fixture::new();
        let asset = fx.asset(AssetStatus::Active).await;

        let updated = fx
            .engine
            .apply(asset.id, &request(LifecycleAction::Return))
            .await
            .unwrap();
        assert_eq!(updated.status, AssetStatus::Spare);
    }

    #[tokio::test]
    async fn move_requires_a_location_and_keeps_the_status() {
        let fx = Fixture::new();
        let asset = fx.asset(AssetStatus::Active).await;
        let warehouse = fx.warehouse().await;

        let err = fx
            .engine
            .apply(asset.id, &request(LifecycleAction::Move))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingField);

        let moved = fx
            .engine
            .apply(
                asset.id,
                &crate::lifecycle::TransitionRequest {
                    target_location_id: Some(warehouse.id),
                    ..request(LifecycleAction::Move)
                },
            )
            .await
            .unwrap();
        assert_eq!(moved.status, AssetStatus::Active);
        assert_eq!(moved.location_id, Some(warehouse.id));

        let events = AuditTrail::list_for_asset(fx.store.as_ref(), asset.id)
            .await
            .unwrap();
        assert_eq!(events[0].action, EventAction::Move);
        assert_eq!(events[0].from_status, None);
        assert_eq!(events[0].to_status, None);
        assert_eq!(events[0].to_location_id, Some(warehouse.id));
    }

    #[tokio::test]
    async fn retire_decommissions_and_closes_the_assignment() {
        let fx = Fixture::new();
        let asset = fx.asset(AssetStatus::Spare).await;
        let person = fx.person().await;
        fx.engine.apply(asset.id, &deploy_to(person.id)).await.unwrap();

        let retired = fx
            .engine
            .apply(asset.id, &request(LifecycleAction::Retire))
            .await
            .unwrap();
        assert_eq!(retired.status, AssetStatus::Retired);
        assert_eq!(retired.operation_state, OperationState::Decommissioned);
        assert!(fx.store.find_open(asset.id).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_deploys_of_one_asset_admit_exactly_one() {
        let fx = Fixture::new();
        let asset = fx.asset(AssetStatus::Spare).await;
        let alice = fx.person().await;
        let bob = fx.person().await;

        let barrier = Arc::new(Barrier::new(2));
        let mut handles = Vec::new();
        for person_id in [alice.id, bob.id] {
            let engine = fx.engine.clone();
            let barrier = barrier.clone();
            let asset_id = asset.id;
            handles.push(tokio::spawn(async move {
                barrier.wait().await;
                engine.apply(asset_id, &deploy_to(person_id)).await
            }));
        }

        let mut ok = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => ok += 1,
                Err(err) => {
                    assert_eq!(err.kind, ErrorKind::InvalidTransition);
                    rejected += 1;
                }
            }
        }
        assert_eq!((ok, rejected), (1, 1));

        let history = AssignmentLedger::list_for_asset(fx.store.as_ref(), asset.id)
            .await
            .unwrap();
        let open: Vec<_> = history.iter().filter(|a| a.is_open()).collect();
        assert_eq!(open.len(), 1);
    }
}
