//! Battler-facing tier operations.
//!
//! [`LadderRuntime`] reads a battler's markers, asks the core engine for a
//! decision and applies it to the battler. Random picks are drawn from an
//! injected [`RngOracle`] seeded per session, so a session can be replayed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use ladder_core::{
    LadderKind, LadderRegistry, PcgRng, ResolutionResult, RngOracle, Tier, TierOutcome,
    compute_seed, current_tier, observe_marker, resolve_tier,
};
use tracing::{debug, warn};

use crate::apply::apply_resolution;
use crate::battler::Battler;
use crate::error::{Result, RuntimeError};

/// Draw context for picking a ladder.
pub(crate) const DRAW_CATEGORY: u32 = 0;
/// Draw context for rolling a tier amount.
pub(crate) const DRAW_TIER: u32 = 1;

pub struct LadderRuntime {
    registry: Arc<LadderRegistry>,
    rng: Arc<dyn RngOracle>,
    session_seed: u64,
    nonce: AtomicU64,
}

impl LadderRuntime {
    /// Runtime over `registry` with a [`PcgRng`] and a fresh random seed.
    pub fn new(registry: Arc<LadderRegistry>) -> Self {
        Self::with_seed(registry, rand::random())
    }

    /// Runtime with a fixed session seed, for replays and tests.
    pub fn with_seed(registry: Arc<LadderRegistry>, session_seed: u64) -> Self {
        Self {
            registry,
            rng: Arc::new(PcgRng),
            session_seed,
            nonce: AtomicU64::new(0),
        }
    }

    /// Replaces the random source.
    pub fn with_rng(mut self, rng: Arc<dyn RngOracle>) -> Self {
        self.rng = rng;
        self
    }

    /// Builds the registry from a content directory (see
    /// [`ladder_content::ContentFactory`]).
    #[cfg(feature = "content")]
    pub fn from_content_dir(data_dir: impl Into<std::path::PathBuf>) -> Result<Self> {
        let registry = ladder_content::ContentFactory::new(data_dir)
            .build_registry()
            .map_err(|e| RuntimeError::Content(format!("{e:#}")))?;
        Ok(Self::new(Arc::new(registry)))
    }

    pub fn registry(&self) -> &LadderRegistry {
        &self.registry
    }

    pub fn session_seed(&self) -> u64 {
        self.session_seed
    }

    pub(crate) fn rng(&self) -> &dyn RngOracle {
        self.rng.as_ref()
    }

    /// Seed for the next draw made on behalf of `battler_id`.
    pub(crate) fn next_seed(&self, battler_id: u32, context: u32) -> u64 {
        let nonce = self.nonce.fetch_add(1, Ordering::Relaxed);
        compute_seed(self.session_seed, nonce, battler_id, context)
    }

    /// Signed tier the battler currently holds on `kind` (0 when none).
    pub fn state_tier<B>(&self, battler: &B, kind: LadderKind) -> Result<Tier>
    where
        B: Battler + ?Sized,
    {
        let ladder = self.registry.ladder(kind)?;
        let marker = observe_marker(ladder, |id| battler.has_marker(id));
        Ok(current_tier(ladder, marker))
    }

    /// [`Self::state_tier`] with a ladder name (any case, aliases allowed).
    pub fn state_tier_named<B>(&self, battler: &B, name: &str) -> Result<Tier>
    where
        B: Battler + ?Sized,
    {
        let kind = self.lookup(name)?;
        self.state_tier(battler, kind)
    }

    /// Moves the battler `delta` tiers along `kind` and applies the result.
    pub fn add_state_tier<B>(
        &self,
        battler: &mut B,
        kind: LadderKind,
        delta: Tier,
    ) -> Result<ResolutionResult>
    where
        B: Battler + ?Sized,
    {
        let ladder = self.registry.effective_ladder(kind, delta)?;
        let current = observe_marker(ladder, |id| battler.has_marker(id));
        let result = resolve_tier(ladder, current, delta, &*battler);
        apply_resolution(battler, &result);

        debug!(
            battler = battler.battler_id(),
            ladder = %kind,
            requested = delta,
            applied = result.applied(),
            tier = result.tier,
            fallback = result.fallback_steps,
            outcome = %result.outcome,
            "resolved tier"
        );

        Ok(result)
    }

    /// [`Self::add_state_tier`] with a ladder name (any case, aliases allowed).
    pub fn add_state_tier_named<B>(
        &self,
        battler: &mut B,
        name: &str,
        delta: Tier,
    ) -> Result<ResolutionResult>
    where
        B: Battler + ?Sized,
    {
        let kind = self.lookup(name)?;
        self.add_state_tier(battler, kind, delta)
    }

    /// Clears every marker of `kind`, then climbs `tier` from neutral.
    ///
    /// The result is relative to the marker held before the call, so setting
    /// the tier a battler already holds reports no change.
    pub fn set_state_tier<B>(
        &self,
        battler: &mut B,
        kind: LadderKind,
        tier: Tier,
    ) -> Result<ResolutionResult>
    where
        B: Battler + ?Sized,
    {
        let ladder = self.registry.ladder(kind)?;
        let previous = observe_marker(ladder, |id| battler.has_marker(id));
        let previous_tier = current_tier(ladder, previous);
        for marker in ladder.markers() {
            if battler.has_marker(marker) {
                battler.remove_marker(marker);
            }
        }

        let climb = self.add_state_tier(battler, kind, tier)?;
        let outcome = match climb.outcome {
            _ if climb.target != previous => TierOutcome::Changed,
            TierOutcome::Pinned => TierOutcome::Pinned,
            _ => TierOutcome::Unchanged,
        };

        Ok(ResolutionResult {
            previous,
            previous_tier,
            requested: tier.saturating_sub(previous_tier),
            outcome,
            ..climb
        })
    }

    /// Adds a tier amount rolled uniformly from `min..=max`.
    pub fn add_random_tier<B>(
        &self,
        battler: &mut B,
        kind: LadderKind,
        min: Tier,
        max: Tier,
    ) -> Result<ResolutionResult>
    where
        B: Battler + ?Sized,
    {
        if min > max {
            return Err(RuntimeError::EmptyTierRange { min, max });
        }
        let seed = self.next_seed(battler.battler_id(), DRAW_TIER);
        let delta = self.rng.range_i32(seed, min, max);
        self.add_state_tier(battler, kind, delta)
    }

    fn lookup(&self, name: &str) -> Result<LadderKind> {
        self.registry.lookup(name).map_err(|error| {
            warn!(ladder = name, %error, "ladder lookup failed");
            RuntimeError::from(error)
        })
    }
}

impl std::fmt::Debug for LadderRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LadderRuntime")
            .field("registry", &self.registry)
            .field("session_seed", &self.session_seed)
            .field("nonce", &self.nonce)
            .finish_non_exhaustive()
    }
}
