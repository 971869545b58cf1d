//! Outcome of a single tier resolution.

use crate::ladder::{LadderKind, StateId, Tier};

/// What happened, for callers choosing text or animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TierOutcome {
    /// Nothing moved: zero delta, or every candidate tier was resisted.
    Unchanged,
    /// The battler moved to a different position.
    Changed,
    /// Already at the extreme in the requested direction.
    Pinned,
}

/// Transient result of [`crate::resolve_tier`].
///
/// Describes the marker change without performing it; the caller removes
/// [`ResolutionResult::removed`] and adds [`ResolutionResult::added`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolutionResult {
    pub kind: LadderKind,
    /// Marker the battler held on this ladder before the call
    /// ([`StateId::NONE`] when it held none).
    pub previous: StateId,
    /// Marker the battler should hold afterwards.
    pub target: StateId,
    pub previous_tier: Tier,
    /// Tier actually reached.
    pub tier: Tier,
    /// Delta passed in by the caller.
    pub requested: Tier,
    /// Tiers retreated toward neutral because of resistance.
    pub fallback_steps: u32,
    pub outcome: TierOutcome,
}

impl ResolutionResult {
    /// A result that changes nothing.
    pub fn unchanged(kind: LadderKind, current: StateId, tier: Tier, requested: Tier) -> Self {
        Self {
            kind,
            previous: current,
            target: current,
            previous_tier: tier,
            tier,
            requested,
            fallback_steps: 0,
            outcome: TierOutcome::Unchanged,
        }
    }

    #[inline]
    pub fn changed(&self) -> bool {
        self.previous != self.target
    }

    /// Net delta applied after clamping and fallback.
    #[inline]
    pub fn applied(&self) -> Tier {
        self.tier - self.previous_tier
    }

    /// Marker to remove from the battler, if any.
    pub fn removed(&self) -> Option<StateId> {
        if self.changed() {
            self.previous.some()
        } else {
            None
        }
    }

    /// Marker to add to the battler, if any.
    pub fn added(&self) -> Option<StateId> {
        if self.changed() {
            self.target.some()
        } else {
            None
        }
    }

    /// True when resistance blocked at least one tier.
    pub fn was_resisted(&self) -> bool {
        self.fallback_steps > 0
    }
}
