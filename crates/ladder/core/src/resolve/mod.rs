//! Tier resolution engine and tier queries.
//!
//! Everything here is a pure function of its inputs plus the caller's
//! [`Resistance`] answers. The engine decides; applying the decision to a
//! battler is the caller's job.

mod engine;
mod query;
mod resist;
mod result;

pub use engine::resolve_tier;
pub use query::{current_tier, observe_marker};
pub use resist::{NoResistance, Resistance};
pub use result::{ResolutionResult, TierOutcome};
