//! Emotion operations: detection, supplementary emotion, and the advantage
//! axis.

use ladder_core::{LadderKind, LadderSet, ResolutionResult, Tier, pick_uniform};
use tracing::debug;

use crate::battler::Battler;
use crate::error::Result;
use crate::service::{DRAW_CATEGORY, LadderRuntime};

impl LadderRuntime {
    /// The battler's current emotion: the first emotion ladder (happy, sad,
    /// angry, afraid) it carries any marker from. `None` means neutral.
    pub fn emotion_kind<B>(&self, battler: &B) -> Option<LadderKind>
    where
        B: Battler + ?Sized,
    {
        LadderKind::EMOTIONS.into_iter().find(|kind| {
            self.registry()
                .ladder(*kind)
                .is_ok_and(|ladder| ladder.markers().any(|id| battler.has_marker(id)))
        })
    }

    /// Tier of the battler's current emotion, 0 when neutral.
    pub fn emotion_tier<B>(&self, battler: &B) -> Result<Tier>
    where
        B: Battler + ?Sized,
    {
        match self.emotion_kind(battler) {
            Some(kind) => self.state_tier(battler, kind),
            None => Ok(0),
        }
    }

    /// Adds `delta` to a uniformly chosen primary emotion.
    pub fn add_random_emotion<B>(
        &self,
        battler: &mut B,
        delta: Tier,
    ) -> Result<Option<ResolutionResult>>
    where
        B: Battler + ?Sized,
    {
        let choices: Vec<LadderKind> = LadderKind::PRIMARY_EMOTIONS
            .into_iter()
            .filter(|kind| self.registry().is_defined(*kind))
            .collect();
        let seed = self.next_seed(battler.battler_id(), DRAW_CATEGORY);
        pick_uniform(&choices, self.rng(), seed)
            .map(|kind| self.add_state_tier(battler, kind, delta))
            .transpose()
    }

    /// Adds `delta` to the emotion the battler already feels. Neutral
    /// battlers are left alone.
    pub fn add_supplementary_emotion<B>(
        &self,
        battler: &mut B,
        delta: Tier,
    ) -> Result<Option<ResolutionResult>>
    where
        B: Battler + ?Sized,
    {
        self.emotion_kind(battler)
            .map(|kind| self.add_state_tier(battler, kind, delta))
            .transpose()
    }

    /// Adds `delta` to an emotion strong against `target`'s emotion.
    ///
    /// Nothing happens when the target is neutral or its emotion is off the
    /// axis.
    pub fn add_advantage_emotion<B, T>(
        &self,
        battler: &mut B,
        target: &T,
        delta: Tier,
    ) -> Result<Option<ResolutionResult>>
    where
        B: Battler + ?Sized,
        T: Battler + ?Sized,
    {
        let Some(against) = self.emotion_kind(target) else {
            return Ok(None);
        };
        // whatever `against` is weak against beats it
        let counters = self.registry().weak_against(against);
        self.add_axis_emotion(battler, against, counters, delta)
    }

    /// Adds `delta` to an emotion `target`'s emotion is strong against.
    pub fn add_disadvantage_emotion<B, T>(
        &self,
        battler: &mut B,
        target: &T,
        delta: Tier,
    ) -> Result<Option<ResolutionResult>>
    where
        B: Battler + ?Sized,
        T: Battler + ?Sized,
    {
        let Some(against) = self.emotion_kind(target) else {
            return Ok(None);
        };
        let prey = self.registry().strong_against(against);
        self.add_axis_emotion(battler, against, prey, delta)
    }

    fn add_axis_emotion<B>(
        &self,
        battler: &mut B,
        against: LadderKind,
        candidates: LadderSet,
        delta: Tier,
    ) -> Result<Option<ResolutionResult>>
    where
        B: Battler + ?Sized,
    {
        let choices: Vec<LadderKind> = candidates.kinds().collect();
        if choices.is_empty() {
            debug!(against = %against, "emotion has no axis relation");
            return Ok(None);
        }
        let seed = self.next_seed(battler.battler_id(), DRAW_CATEGORY);
        pick_uniform(&choices, self.rng(), seed)
            .map(|kind| self.add_state_tier(battler, kind, delta))
            .transpose()
    }
}
