//! Peripheral cascade over the transition engine.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::RelationshipGraph;
use assethub_entity::asset::Asset;
use assethub_entity::lifecycle::LifecycleAction;
use assethub_entity::relationship::RelationType;

use super::engine::{TransitionEngine, TransitionRequest};

/// What happened to one peripheral during a cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PeripheralResult {
    /// The action was applied; this is the updated peripheral.
    Applied { asset: Asset },
    /// The peripheral's status does not admit the action; it was left
    /// untouched.
    Skipped { reason: String },
    /// The action failed for a reason other than an illegal transition.
    Failed { kind: ErrorKind, message: String },
}

/// Per-peripheral entry in a cascade result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeripheralOutcome {
    /// The peripheral the entry is about.
    pub asset_id: Uuid,
    /// What happened to it.
    #[serde(flatten)]
    pub outcome: PeripheralResult,
}

/// Result of one transition with its peripheral fan-out.
///
/// The primary either succeeded (and is present here) or the whole call
/// failed; peripherals report individually and never roll anything back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CascadeOutcome {
    /// The updated primary asset.
    pub primary: Asset,
    /// Per-peripheral outcomes, in discovery order.
    pub peripherals: Vec<PeripheralOutcome>,
}

/// Fans a primary asset's transition out to its peripherals.
///
/// Discovery is single-hop: peripherals of a peripheral are not
/// followed. Every per-asset run goes through the engine, so per-asset
/// exclusivity holds throughout.
pub struct CascadeRunner {
    engine: Arc<TransitionEngine>,
    graph: Arc<dyn RelationshipGraph>,
}

impl CascadeRunner {
    /// Create a new runner over the engine and the relationship graph.
    pub fn new(engine: Arc<TransitionEngine>, graph: Arc<dyn RelationshipGraph>) -> Self {
        Self { engine, graph }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &Arc<TransitionEngine> {
        &self.engine
    }

    /// Route one transition request to the right execution shape.
    ///
    /// `return`/`repair`/`retire` cascade over discovered peripherals;
    /// `deploy` fans out over the request's explicit peripheral list;
    /// `move` touches the primary alone.
    pub async fn dispatch(
        &self,
        asset_id: Uuid,
        request: &TransitionRequest,
    ) -> AppResult<CascadeOutcome> {
        match request.action {
            LifecycleAction::Deploy => self.deploy(asset_id, request).await,
            LifecycleAction::Move => {
                let primary = self.engine.apply(asset_id, request).await?;
                Ok(CascadeOutcome {
                    primary,
                    peripherals: Vec::new(),
                })
            }
            LifecycleAction::Return | LifecycleAction::Repair | LifecycleAction::Retire => {
                self.apply_with_cascade(asset_id, request).await
            }
        }
    }

    /// Deploy a primary asset, then each explicitly listed peripheral.
    ///
    /// Successfully deployed peripherals are linked to the primary with
    /// a `peripheral_of` edge, so later cascades discover them. A
    /// peripheral failure never rolls back the primary or its siblings.
    pub async fn deploy(
        &self,
        asset_id: Uuid,
        request: &TransitionRequest,
    ) -> AppResult<CascadeOutcome> {
        let primary = self.engine.apply(asset_id, request).await?;

        let peripheral_request = request.for_peripheral();
        let mut peripherals = Vec::with_capacity(request.peripherals.len());
        for peripheral_id in &request.peripherals {
            let outcome = match self.engine.apply(*peripheral_id, &peripheral_request).await {
                Ok(asset) => {
                    match self
                        .graph
                        .link(asset_id, *peripheral_id, RelationType::PeripheralOf)
                        .await
                    {
                        Ok(_) => PeripheralResult::Applied { asset },
                        Err(err) => failure(*peripheral_id, &err),
                    }
                }
                Err(err) => classify(*peripheral_id, err),
            };
            peripherals.push(PeripheralOutcome {
                asset_id: *peripheral_id,
                outcome,
            });
        }

        info!(
            asset_id = %asset_id,
            peripherals = peripherals.len(),
            "deployed asset"
        );
        Ok(CascadeOutcome {
            primary,
            peripherals,
        })
    }

    /// Apply one action to a primary and every discovered peripheral.
    async fn apply_with_cascade(
        &self,
        asset_id: Uuid,
        request: &TransitionRequest,
    ) -> AppResult<CascadeOutcome> {
        let discovered = self.graph.peripherals_of(asset_id).await?;

        let primary = self.engine.apply(asset_id, request).await?;

        let peripheral_request = request.for_peripheral();
        let mut peripherals = Vec::with_capacity(discovered.len());
        for peripheral in discovered {
            let outcome = match self.engine.apply(peripheral.id, &peripheral_request).await {
                Ok(asset) => PeripheralResult::Applied { asset },
                Err(err) => classify(peripheral.id, err),
            };
            peripherals.push(PeripheralOutcome {
                asset_id: peripheral.id,
                outcome,
            });
        }

        // A returned bundle is dissolved; repair and retire keep the
        // edges for the asset's eventual comeback.
        if request.action == LifecycleAction::Return {
            self.graph.unlink_children(asset_id).await?;
        }

        Ok(CascadeOutcome {
            primary,
            peripherals,
        })
    }
}

/// Sort a peripheral error into a skip (illegal transition) or a
/// reported failure (everything else).
fn classify(peripheral_id: Uuid, err: AppError) -> PeripheralResult {
    if err.kind == ErrorKind::InvalidTransition {
        PeripheralResult::Skipped {
            reason: err.message,
        }
    } else {
        failure(peripheral_id, &err)
    }
}

fn failure(peripheral_id: Uuid, err: &AppError) -> PeripheralResult {
    warn!(
        peripheral_id = %peripheral_id,
        kind = %err.kind,
        "peripheral cascade step failed"
    );
    PeripheralResult::Failed {
        kind: err.kind,
        message: err.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use assethub_core::traits::{AssetRegistry, AssignmentLedger, AuditTrail, RelationshipGraph};
    use assethub_entity::asset::AssetStatus;
    use assethub_entity::lifecycle::LifecycleAction;
    use assethub_entity::relationship::RelationType;

    use super::PeripheralResult;
    use crate::lifecycle::testkit::{deploy_to, request, Fixture};
    use crate::lifecycle::TransitionRequest;

    #[tokio::test]
    async fn deploy_with_peripherals_links_and_reports_each() {
        let fx = Fixture::new();
        let person = fx.person().await;
        let laptop = fx.asset(AssetStatus::Spare).await;
        let monitor = fx.asset(AssetStatus::Spare).await;
        let dead_dock = fx.asset(AssetStatus::Retired).await;

        let outcome = fx
            .cascade
            .dispatch(
                laptop.id,
                &TransitionRequest {
                    peripherals: vec![monitor.id, dead_dock.id],
                    ..deploy_to(person.id)
                },
            )
            .await
            .unwrap();

        assert_eq!(outcome.primary.status, AssetStatus::Active);
        assert_eq!(outcome.peripherals.len(), 2);
        assert!(matches!(
            outcome.peripherals[0].outcome,
            PeripheralResult::Applied { .. }
        ));
        assert!(matches!(
            outcome.peripherals[1].outcome,
            PeripheralResult::Skipped { .. }
        ));

        // The deployed peripheral is now discoverable; the skipped one
        // was never linked.
        let linked = fx.store.peripherals_of(laptop.id).await.unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, monitor.id);

        let secondary = fx.store.find_open(monitor.id).await.unwrap().unwrap();
        assert!(!secondary.primary_device);
    }

    #[tokio::test]
    async fn return_cascades_and_dissolves_the_bundle() {
        let fx = Fixture::new();
        let person = fx.person().await;
        let laptop = fx.asset(AssetStatus::Spare).await;
        let monitor = fx.asset(AssetStatus::Spare).await;
        fx.cascade
            .dispatch(
                laptop.id,
                &TransitionRequest {
                    peripherals: vec![monitor.id],
                    ..deploy_to(person.id)
                },
            )
            .await
            .unwrap();

        let outcome = fx
            .cascade
            .dispatch(laptop.id, &request(LifecycleAction::Return))
            .await
            .unwrap();

        assert_eq!(outcome.primary.status, AssetStatus::Spare);
        assert!(matches!(
            outcome.peripherals[0].outcome,
            PeripheralResult::Applied { .. }
        ));
        let returned = fx.store.get(monitor.id).await.unwrap().unwrap();
        assert_eq!(returned.status, AssetStatus::Spare);
        assert!(fx.store.find_open(monitor.id).await.unwrap().is_none());

        assert!(RelationshipGraph::list_for_asset(fx.store.as_ref(), laptop.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn retire_skips_an_already_retired_peripheral_and_keeps_edges() {
        let fx = Fixture::new();
        let laptop = fx.asset(AssetStatus::Active).await;
        let monitor = fx.asset(AssetStatus::Active).await;
        let dock = fx.asset(AssetStatus::Retired).await;
        fx.store
            .link(laptop.id, monitor.id, RelationType::PeripheralOf)
            .await
            .unwrap();
        fx.store
            .link(laptop.id, dock.id, RelationType::AttachedTo)
            .await
            .unwrap();

        let outcome = fx
            .cascade
            .dispatch(laptop.id, &request(LifecycleAction::Retire))
            .await
            .unwrap();

        assert_eq!(outcome.primary.status, AssetStatus::Retired);
        let by_id = |id| {
            outcome
                .peripherals
                .iter()
                .find(|p| p.asset_id == id)
                .unwrap()
        };
        assert!(matches!(by_id(monitor.id).outcome, PeripheralResult::Applied { .. }));
        assert!(matches!(by_id(dock.id).outcome, PeripheralResult::Skipped { .. }));

        // The skipped peripheral gets no audit event.
        assert!(AuditTrail::list_for_asset(fx.store.as_ref(), dock.id)
            .await
            .unwrap()
            .is_empty());

        assert_eq!(
            RelationshipGraph::list_for_asset(fx.store.as_ref(), laptop.id)
                .await
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn repair_cascade_keeps_edges() {
        let fx = Fixture::new();
        let laptop = fx.asset(AssetStatus::Active).await;
        let monitor = fx.asset(AssetStatus::Active).await;
        fx.store
            .link(laptop.id, monitor.id, RelationType::PeripheralOf)
            .await
            .unwrap();

        fx.cascade
            .dispatch(laptop.id, &request(LifecycleAction::Repair))
            .await
            .unwrap();

        assert_eq!(
            RelationshipGraph::list_for_asset(fx.store.as_ref(), laptop.id)
                .await
                .unwrap()
                .len(),
            1
        );
    }
}
