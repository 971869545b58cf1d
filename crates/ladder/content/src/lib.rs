//! Data-driven ladder content and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Ladder tables (ladders, aliases, axis relations, paired ladders)
//! - Ladder configuration (combine/split toggle)
//!
//! Content is consumed once at startup to build a
//! [`ladder_core::LadderRegistry`] and never changes afterwards.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LadderTableLoader, LoadResult};
