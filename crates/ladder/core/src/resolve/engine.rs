//! Tier resolution: clamp, then retreat toward neutral past resisted tiers.

use super::{ResolutionResult, Resistance, TierOutcome};
use crate::ladder::{Ladder, StateId, Tier};

/// Computes where `delta` moves a battler holding `current` on `ladder`.
///
/// 1. `current` locates the starting position; a marker outside the ladder
///    (or [`StateId::NONE`]) starts from neutral.
/// 2. The move saturates at both ends of the ladder.
/// 3. While the candidate marker is resisted, the delta shrinks one tier
///    toward zero. Neutral is never resisted, so the walk stops there at the
///    latest.
///
/// A zero delta returns immediately without consulting `resistance`. The
/// predicate is called at most `|delta|` times.
pub fn resolve_tier<R>(
    ladder: &Ladder,
    current: StateId,
    delta: Tier,
    resistance: &R,
) -> ResolutionResult
where
    R: Resistance + ?Sized,
{
    let kind = ladder.kind();
    let current_index = ladder
        .index_of(current)
        .unwrap_or_else(|| ladder.neutral_index());
    let previous = ladder.positions()[current_index];
    let previous_tier = ladder.tier_of_index(current_index);

    if delta == 0 {
        return ResolutionResult::unchanged(kind, previous, previous_tier, delta);
    }

    // Overshoot past either end lands on the extreme; a resisted extreme
    // behaves the same whatever the overshoot, so start from what is reachable.
    let reachable = ladder.clamp_tier(previous_tier.saturating_add(delta)) - previous_tier;
    if reachable == 0 {
        return ResolutionResult {
            outcome: TierOutcome::Pinned,
            ..ResolutionResult::unchanged(kind, previous, previous_tier, delta)
        };
    }

    let index_for = |offset: Tier| (current_index as Tier + offset) as usize;

    let mut remaining = reachable;
    let mut fallback_steps = 0;
    let mut target = ladder.positions()[index_for(remaining)];
    while remaining != 0 && !target.is_none() && resistance.is_resisted(target) {
        remaining -= remaining.signum();
        fallback_steps += 1;
        target = ladder.positions()[index_for(remaining)];
    }

    let outcome = if remaining == 0 {
        TierOutcome::Unchanged
    } else {
        TierOutcome::Changed
    };

    ResolutionResult {
        kind,
        previous,
        target,
        previous_tier,
        tier: previous_tier + remaining,
        requested: delta,
        fallback_steps,
        outcome,
    }
}
