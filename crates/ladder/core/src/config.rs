/// Ladder configuration read once at startup.
///
/// The configuration is consumed by [`crate::LadderRegistry::build`], which
/// resolves it into concrete ladders. Nothing re-reads it per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LadderConfig {
    /// Treat ladders spanning both directions (buff/debuff) as one continuous
    /// ladder. When false, each such ladder is split at neutral into two
    /// independent halves and a delta only walks the half matching its sign.
    pub combine_buffs: bool,
}

impl LadderConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of positions on a single ladder, neutral included.
    pub const MAX_LADDER_POSITIONS: usize = 16;
    /// Maximum number of alternate names accepted per ladder.
    pub const MAX_ALIASES_PER_LADDER: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_COMBINE_BUFFS: bool = true;

    pub const fn new() -> Self {
        Self {
            combine_buffs: Self::DEFAULT_COMBINE_BUFFS,
        }
    }

    pub const fn with_combine_buffs(combine_buffs: bool) -> Self {
        Self { combine_buffs }
    }
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self::new()
    }
}
