//! Asset lifecycle core: transition engine, peripheral cascade, and
//! offboarding orchestrator.
//!
//! The engine is the only writer of lifecycle state. The cascade and the
//! orchestrator never touch storage directly; they fan out over the
//! engine, which serializes work per asset through [`AssetLocks`].

pub mod cascade;
pub mod engine;
pub mod locks;
pub mod offboarding;

pub use cascade::{CascadeOutcome, CascadeRunner, PeripheralOutcome, PeripheralResult};
pub use engine::{TransitionEngine, TransitionRequest};
pub use locks::AssetLocks;
pub use offboarding::{
    AssetOverride, OffboardOutcome, OffboardedAsset, OffboardingReport, OffboardingRequest,
    OffboardingService,
};
