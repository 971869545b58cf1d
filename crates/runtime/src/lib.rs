//! Battler-facing tier operations on top of `ladder-core`.
//!
//! The core crate decides where a delta lands; this crate reads a battler's
//! markers, runs the resolution and writes the outcome back. Consumers
//! implement [`Battler`] for their own battler record and drive it through a
//! shared [`LadderRuntime`].
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts [`LadderRuntime`] and the generic tier operations
//! - [`battler`] defines the marker store and resistance seam
//! - [`apply`] writes a resolution back to a marker store
//! - emotion and buff operations are layered on [`LadderRuntime`] in private
//!   modules
pub mod apply;
pub mod battler;
pub mod error;
pub mod service;

mod buff;
mod emotion;

pub use apply::apply_resolution;
pub use battler::{Battler, BattlerState, MarkerStore};
pub use error::{Result, RuntimeError};
pub use service::LadderRuntime;
