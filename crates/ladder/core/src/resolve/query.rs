//! Read-only queries over a battler's markers.

use crate::ladder::{Ladder, StateId, Tier};

/// Signed tier of `marker` on `ladder`, or 0 when it is not on the ladder.
pub fn current_tier(ladder: &Ladder, marker: StateId) -> Tier {
    ladder
        .index_of(marker)
        .map_or(0, |index| ladder.tier_of_index(index))
}

/// First marker of `ladder` (lowest tier first) the battler carries, or
/// [`StateId::NONE`] when it carries none.
pub fn observe_marker<F>(ladder: &Ladder, mut has_marker: F) -> StateId
where
    F: FnMut(StateId) -> bool,
{
    ladder
        .markers()
        .find(|marker| has_marker(*marker))
        .unwrap_or(StateId::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::LadderKind;

    fn spd() -> Ladder {
        let ids = [106, 105, 104, 0, 101, 102, 103].map(StateId);
        Ladder::new(LadderKind::Spd, &ids).unwrap()
    }

    #[test]
    fn tier_of_known_and_unknown_markers() {
        let ladder = spd();
        assert_eq!(current_tier(&ladder, StateId(106)), -3);
        assert_eq!(current_tier(&ladder, StateId(102)), 2);
        assert_eq!(current_tier(&ladder, StateId::NONE), 0);
        assert_eq!(current_tier(&ladder, StateId(7)), 0);
    }

    #[test]
    fn observe_picks_lowest_position_first() {
        let ladder = spd();
        let carried = [StateId(7), StateId(102), StateId(105)];
        let marker = observe_marker(&ladder, |id| carried.contains(&id));
        assert_eq!(marker, StateId(105));

        let marker = observe_marker(&ladder, |_| false);
        assert_eq!(marker, StateId::NONE);
    }
}
