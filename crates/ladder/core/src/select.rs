//! Category selection on top of tier queries.
//!
//! Not part of resolution: these helpers only choose *which* ladder a
//! caller should resolve next.

use crate::ladder::{LadderKind, Tier};
use crate::rng::RngOracle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Extremum {
    Highest,
    Lowest,
}

impl Extremum {
    fn beats(self, candidate: Tier, best: Tier) -> bool {
        match self {
            Extremum::Highest => candidate > best,
            Extremum::Lowest => candidate < best,
        }
    }
}

/// Picks uniformly among `kinds`. `None` when empty.
pub fn pick_uniform<R>(kinds: &[LadderKind], rng: &R, seed: u64) -> Option<LadderKind>
where
    R: RngOracle + ?Sized,
{
    if kinds.is_empty() {
        return None;
    }
    kinds.get(rng.pick_index(seed, kinds.len())).copied()
}

/// Picks the ladder whose tier is the highest (or lowest), breaking ties
/// uniformly at random. `None` when `candidates` is empty.
pub fn pick_extremum<R>(
    candidates: &[(LadderKind, Tier)],
    extremum: Extremum,
    rng: &R,
    seed: u64,
) -> Option<LadderKind>
where
    R: RngOracle + ?Sized,
{
    let mut tied: Vec<LadderKind> = Vec::with_capacity(candidates.len());
    let mut best: Option<Tier> = None;

    for &(kind, tier) in candidates {
        match best {
            Some(current) if tier == current => tied.push(kind),
            Some(current) if !extremum.beats(tier, current) => {}
            _ => {
                best = Some(tier);
                tied.clear();
                tied.push(kind);
            }
        }
    }

    pick_uniform(&tied, rng, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{PcgRng, compute_seed};

    #[test]
    fn unique_extremum_needs_no_roll() {
        let candidates = [
            (LadderKind::Atk, 1),
            (LadderKind::Def, -2),
            (LadderKind::Spd, 3),
        ];
        for seed in 0..20 {
            assert_eq!(
                pick_extremum(&candidates, Extremum::Highest, &PcgRng, seed),
                Some(LadderKind::Spd)
            );
            assert_eq!(
                pick_extremum(&candidates, Extremum::Lowest, &PcgRng, seed),
                Some(LadderKind::Def)
            );
        }
    }

    #[test]
    fn ties_are_broken_among_tied_only() {
        let candidates = [
            (LadderKind::Atk, 0),
            (LadderKind::Def, 2),
            (LadderKind::Spd, 2),
        ];
        let mut picked_def = false;
        let mut picked_spd = false;
        for nonce in 0..100 {
            let seed = compute_seed(5, nonce, 0, 0);
            match pick_extremum(&candidates, Extremum::Highest, &PcgRng, seed) {
                Some(LadderKind::Def) => picked_def = true,
                Some(LadderKind::Spd) => picked_spd = true,
                other => panic!("unexpected pick {other:?}"),
            }
        }
        assert!(picked_def && picked_spd);
    }

    #[test]
    fn empty_candidates_pick_nothing() {
        assert_eq!(pick_extremum(&[], Extremum::Lowest, &PcgRng, 0), None);
        assert_eq!(pick_uniform(&[], &PcgRng, 0), None);
    }
}
