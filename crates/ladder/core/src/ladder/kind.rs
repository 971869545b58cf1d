//! Ladder identities and the groups they belong to.

use bitflags::bitflags;

/// Named ladders known to the engine.
///
/// Canonical names are the lowercase variant names (`"sad"`, `"atk"`, ...).
/// Parsing through [`core::str::FromStr`] is an exact match on the canonical
/// name; alternate spellings go through [`crate::LadderRegistry::resolve_name`]
/// first.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum LadderKind {
    // ========================================================================
    // Emotions
    // ========================================================================
    Sad = 0,
    Angry = 1,
    Happy = 2,
    /// Single-step emotion outside the advantage axis.
    Afraid = 3,

    // ========================================================================
    // Stat buffs (span both directions around neutral)
    // ========================================================================
    Atk = 4,
    Def = 5,
    Spd = 6,
}

/// Broad grouping of ladders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum LadderCategory {
    Emotion,
    Buff,
}

impl LadderKind {
    /// Total number of ladder kinds.
    pub const COUNT: usize = 7;

    /// Emotion ladders in detection order: the first one a battler carries a
    /// marker from is its current emotion.
    pub const EMOTIONS: [LadderKind; 4] = [
        LadderKind::Happy,
        LadderKind::Sad,
        LadderKind::Angry,
        LadderKind::Afraid,
    ];

    /// Emotions forming the rotational advantage axis.
    pub const PRIMARY_EMOTIONS: [LadderKind; 3] =
        [LadderKind::Happy, LadderKind::Sad, LadderKind::Angry];

    /// Stat buff ladders.
    pub const BUFFS: [LadderKind; 3] = [LadderKind::Atk, LadderKind::Def, LadderKind::Spd];

    /// Returns all ladder kinds in index order.
    pub const fn all() -> [LadderKind; Self::COUNT] {
        [
            LadderKind::Sad,
            LadderKind::Angry,
            LadderKind::Happy,
            LadderKind::Afraid,
            LadderKind::Atk,
            LadderKind::Def,
            LadderKind::Spd,
        ]
    }

    /// Returns the kind as an array index.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    pub const fn category(self) -> LadderCategory {
        match self {
            LadderKind::Sad | LadderKind::Angry | LadderKind::Happy | LadderKind::Afraid => {
                LadderCategory::Emotion
            }
            LadderKind::Atk | LadderKind::Def | LadderKind::Spd => LadderCategory::Buff,
        }
    }

    pub const fn is_emotion(self) -> bool {
        matches!(self.category(), LadderCategory::Emotion)
    }

    pub const fn is_buff(self) -> bool {
        matches!(self.category(), LadderCategory::Buff)
    }

    /// The single-bit set containing only this kind.
    pub const fn as_set(self) -> LadderSet {
        LadderSet::from_bits_retain(1 << self as u8)
    }
}

bitflags! {
    /// A set of ladder kinds, one bit per [`LadderKind`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LadderSet: u8 {
        const SAD = 1 << 0;
        const ANGRY = 1 << 1;
        const HAPPY = 1 << 2;
        const AFRAID = 1 << 3;
        const ATK = 1 << 4;
        const DEF = 1 << 5;
        const SPD = 1 << 6;

        const EMOTIONS = Self::SAD.bits() | Self::ANGRY.bits() | Self::HAPPY.bits() | Self::AFRAID.bits();
        const BUFFS = Self::ATK.bits() | Self::DEF.bits() | Self::SPD.bits();
    }
}

impl LadderSet {
    pub const fn has(self, kind: LadderKind) -> bool {
        self.contains(kind.as_set())
    }

    /// Iterates member kinds in index order.
    pub fn kinds(self) -> impl Iterator<Item = LadderKind> {
        LadderKind::all().into_iter().filter(move |kind| self.has(*kind))
    }
}

impl FromIterator<LadderKind> for LadderSet {
    fn from_iter<I: IntoIterator<Item = LadderKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(LadderSet::empty(), |set, kind| set | kind.as_set())
    }
}
