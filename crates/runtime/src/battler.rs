//! Battler-side collaborators: the marker store and resistances.
//!
//! The runtime never owns battler state. Hosts implement [`Battler`] for
//! their own battler record; [`BattlerState`] is a small in-memory record for
//! tools and tests.

use std::collections::BTreeSet;

use ladder_core::{Resistance, StateId};

/// Markers currently applied to a battler.
pub trait MarkerStore {
    fn has_marker(&self, marker: StateId) -> bool;
    fn add_marker(&mut self, marker: StateId);
    fn remove_marker(&mut self, marker: StateId);
}

/// A battler the runtime can read tiers from and apply resolutions to.
///
/// One resolve-then-apply sequence takes `&mut` to the battler for its whole
/// duration, so no other write can interleave.
pub trait Battler: MarkerStore + Resistance {
    /// Stable id, mixed into random draws made for this battler.
    fn battler_id(&self) -> u32;
}

/// In-memory battler record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattlerState {
    id: u32,
    markers: BTreeSet<StateId>,
    resisted: BTreeSet<StateId>,
}

impl BattlerState {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_markers(mut self, markers: impl IntoIterator<Item = StateId>) -> Self {
        self.markers.extend(markers);
        self
    }

    pub fn with_resistances(mut self, resisted: impl IntoIterator<Item = StateId>) -> Self {
        self.resisted.extend(resisted);
        self
    }

    pub fn resist(&mut self, marker: StateId) {
        self.resisted.insert(marker);
    }

    pub fn clear_resistance(&mut self, marker: StateId) {
        self.resisted.remove(&marker);
    }

    /// Markers currently applied, in id order.
    pub fn markers(&self) -> impl Iterator<Item = StateId> + '_ {
        self.markers.iter().copied()
    }
}

impl MarkerStore for BattlerState {
    fn has_marker(&self, marker: StateId) -> bool {
        self.markers.contains(&marker)
    }

    fn add_marker(&mut self, marker: StateId) {
        if !marker.is_none() {
            self.markers.insert(marker);
        }
    }

    fn remove_marker(&mut self, marker: StateId) {
        self.markers.remove(&marker);
    }
}

impl Resistance for BattlerState {
    fn is_resisted(&self, marker: StateId) -> bool {
        self.resisted.contains(&marker)
    }
}

impl Battler for BattlerState {
    fn battler_id(&self) -> u32 {
        self.id
    }
}
