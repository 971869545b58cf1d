//! Deterministic tier ladders and the resolution engine that walks them.
//!
//! `ladder-core` defines the canonical rules for tiered status effects:
//! which ladders exist, how they relate to each other, and how a signed tier
//! delta moves a battler along a ladder. Everything here is pure. The battler
//! record, its marker set and its resistances live with the caller and are
//! passed in explicitly.
//!
//! - [`registry::LadderRegistry`] is built once from a [`ladder::LadderTable`]
//!   and is read-only afterwards.
//! - [`resolve::resolve_tier`] computes a [`resolve::ResolutionResult`]; the
//!   caller applies the marker add/remove it describes.
pub mod config;
pub mod error;
pub mod ladder;
pub mod registry;
pub mod resolve;
pub mod rng;
pub mod select;

pub use config::LadderConfig;
pub use error::{CoreError, ErrorSeverity};
pub use ladder::{
    AxisSpec, Ladder, LadderCategory, LadderKind, LadderSet, LadderSpec, LadderTable, PairSpec,
    StateId, Tier,
};
pub use registry::{LadderPair, LadderRegistry, RegistryError};
pub use resolve::{
    NoResistance, ResolutionResult, Resistance, TierOutcome, current_tier, observe_marker,
    resolve_tier,
};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use select::{Extremum, pick_extremum, pick_uniform};
