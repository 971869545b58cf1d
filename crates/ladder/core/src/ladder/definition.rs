//! Ladder definition: an ordered, bounded sequence of marker positions.

use arrayvec::ArrayVec;

use super::{LadderKind, StateId, Tier};
use crate::config::LadderConfig;
use crate::registry::RegistryError;

type Positions = ArrayVec<StateId, { LadderConfig::MAX_LADDER_POSITIONS }>;

/// Ordered positions of one ladder, lowest tier first.
///
/// Invariants (checked by [`Ladder::new`]):
/// - exactly one position holds [`StateId::NONE`] (tier 0)
/// - every other marker appears once
/// - the ladder fits in [`LadderConfig::MAX_LADDER_POSITIONS`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ladder {
    kind: LadderKind,
    positions: Positions,
    neutral: usize,
}

impl Ladder {
    /// Builds a ladder from positions ordered lowest tier first.
    pub fn new(kind: LadderKind, positions: &[StateId]) -> Result<Self, RegistryError> {
        if positions.len() > LadderConfig::MAX_LADDER_POSITIONS {
            return Err(RegistryError::InvalidLadder {
                kind,
                reason: "too many positions",
            });
        }

        let mut neutral = None;
        for (index, marker) in positions.iter().enumerate() {
            if marker.is_none() {
                if neutral.is_some() {
                    return Err(RegistryError::InvalidLadder {
                        kind,
                        reason: "more than one neutral position",
                    });
                }
                neutral = Some(index);
            } else if positions[..index].contains(marker) {
                return Err(RegistryError::DuplicateMarker {
                    kind,
                    marker: *marker,
                });
            }
        }

        let neutral = neutral.ok_or(RegistryError::InvalidLadder {
            kind,
            reason: "no neutral position",
        })?;

        Ok(Self {
            kind,
            positions: positions.iter().copied().collect(),
            neutral,
        })
    }

    #[inline]
    pub fn kind(&self) -> LadderKind {
        self.kind
    }

    /// Number of positions, neutral included. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[StateId] {
        &self.positions
    }

    #[inline]
    pub fn neutral_index(&self) -> usize {
        self.neutral
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.positions.len() - 1
    }

    /// Lowest reachable tier (0 or negative).
    pub fn min_tier(&self) -> Tier {
        -(self.neutral as Tier)
    }

    /// Highest reachable tier (0 or positive).
    pub fn max_tier(&self) -> Tier {
        (self.last_index() - self.neutral) as Tier
    }

    /// True when the ladder has positions on both sides of neutral.
    pub fn is_bidirectional(&self) -> bool {
        self.min_tier() < 0 && self.max_tier() > 0
    }

    /// Position index holding `marker`. The neutral id maps to the neutral index.
    pub fn index_of(&self, marker: StateId) -> Option<usize> {
        if marker.is_none() {
            return Some(self.neutral);
        }
        self.positions.iter().position(|m| *m == marker)
    }

    /// True when `marker` is a non-neutral position of this ladder.
    pub fn contains(&self, marker: StateId) -> bool {
        !marker.is_none() && self.positions.contains(&marker)
    }

    #[inline]
    pub fn tier_of_index(&self, index: usize) -> Tier {
        index as Tier - self.neutral as Tier
    }

    pub fn index_of_tier(&self, tier: Tier) -> Option<usize> {
        let index = self.neutral as Tier + tier;
        (0..self.positions.len() as Tier)
            .contains(&index)
            .then_some(index as usize)
    }

    pub fn marker_at(&self, index: usize) -> Option<StateId> {
        self.positions.get(index).copied()
    }

    pub fn marker_at_tier(&self, tier: Tier) -> Option<StateId> {
        self.index_of_tier(tier).and_then(|index| self.marker_at(index))
    }

    /// Clamps `tier` into `[min_tier, max_tier]`.
    pub fn clamp_tier(&self, tier: Tier) -> Tier {
        tier.clamp(self.min_tier(), self.max_tier())
    }

    /// Iterates the non-neutral markers, lowest tier first.
    pub fn markers(&self) -> impl Iterator<Item = StateId> + '_ {
        self.positions.iter().copied().filter(|m| !m.is_none())
    }

    /// Neutral and every position above it.
    pub fn upper_half(&self) -> Ladder {
        self.slice(self.neutral, self.positions.len())
    }

    /// Every position below neutral, and neutral.
    pub fn lower_half(&self) -> Ladder {
        self.slice(0, self.neutral + 1)
    }

    fn slice(&self, start: usize, end: usize) -> Ladder {
        Ladder {
            kind: self.kind,
            positions: self.positions[start..end].iter().copied().collect(),
            neutral: self.neutral - start,
        }
    }
}
