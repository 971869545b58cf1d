//! Buff operations: random buffs, emotion-paired buffs and extremum buffs.

use ladder_core::{
    Extremum, LadderKind, LadderPair, ResolutionResult, Tier, pick_extremum, pick_uniform,
};

use crate::battler::Battler;
use crate::error::Result;
use crate::service::{DRAW_CATEGORY, LadderRuntime};

impl LadderRuntime {
    /// Adds `delta` to a uniformly chosen buff ladder.
    pub fn add_random_buff<B>(
        &self,
        battler: &mut B,
        delta: Tier,
    ) -> Result<Option<ResolutionResult>>
    where
        B: Battler + ?Sized,
    {
        let choices = self.defined_buffs();
        let seed = self.next_seed(battler.battler_id(), DRAW_CATEGORY);
        pick_uniform(&choices, self.rng(), seed)
            .map(|kind| self.add_state_tier(battler, kind, delta))
            .transpose()
    }

    /// Adds `delta` to the buff that plays to the current emotion's strength.
    pub fn add_supplementary_buff<B>(
        &self,
        battler: &mut B,
        delta: Tier,
    ) -> Result<Option<ResolutionResult>>
    where
        B: Battler + ?Sized,
    {
        self.add_paired_buff(battler, delta, |pair| pair.reinforcing)
    }

    /// Adds `delta` to the buff that covers the current emotion's weakness.
    pub fn add_complementary_buff<B>(
        &self,
        battler: &mut B,
        delta: Tier,
    ) -> Result<Option<ResolutionResult>>
    where
        B: Battler + ?Sized,
    {
        self.add_paired_buff(battler, delta, |pair| pair.offsetting)
    }

    /// Adds `delta` to the buff the battler is currently highest in. Ties are
    /// broken uniformly.
    pub fn add_highest_buff<B>(
        &self,
        battler: &mut B,
        delta: Tier,
    ) -> Result<Option<ResolutionResult>>
    where
        B: Battler + ?Sized,
    {
        self.add_extremum_buff(battler, delta, Extremum::Highest)
    }

    /// Adds `delta` to the buff the battler is currently lowest in. Ties are
    /// broken uniformly.
    pub fn add_lowest_buff<B>(
        &self,
        battler: &mut B,
        delta: Tier,
    ) -> Result<Option<ResolutionResult>>
    where
        B: Battler + ?Sized,
    {
        self.add_extremum_buff(battler, delta, Extremum::Lowest)
    }

    fn add_paired_buff<B, F>(
        &self,
        battler: &mut B,
        delta: Tier,
        select: F,
    ) -> Result<Option<ResolutionResult>>
    where
        B: Battler + ?Sized,
        F: FnOnce(LadderPair) -> LadderKind,
    {
        let Some(pair) = self
            .emotion_kind(battler)
            .and_then(|emotion| self.registry().pair(emotion))
        else {
            return Ok(None);
        };
        self.add_state_tier(battler, select(pair), delta).map(Some)
    }

    fn add_extremum_buff<B>(
        &self,
        battler: &mut B,
        delta: Tier,
        extremum: Extremum,
    ) -> Result<Option<ResolutionResult>>
    where
        B: Battler + ?Sized,
    {
        let mut candidates = Vec::with_capacity(LadderKind::BUFFS.len());
        for kind in self.defined_buffs() {
            candidates.push((kind, self.state_tier(battler, kind)?));
        }
        let seed = self.next_seed(battler.battler_id(), DRAW_CATEGORY);
        pick_extremum(&candidates, extremum, self.rng(), seed)
            .map(|kind| self.add_state_tier(battler, kind, delta))
            .transpose()
    }

    fn defined_buffs(&self) -> Vec<LadderKind> {
        LadderKind::BUFFS
            .into_iter()
            .filter(|kind| self.registry().is_defined(*kind))
            .collect()
    }
}
