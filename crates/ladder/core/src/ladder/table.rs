//! Declarative ladder tables.
//!
//! A [`LadderTable`] is the raw, unvalidated description of every ladder and
//! relation. [`crate::LadderRegistry::build`] validates it and turns it into
//! lookup structures. Tables can be written by hand, loaded from RON/TOML by
//! `ladder-content`, or taken from [`LadderTable::standard`].

use super::{LadderKind, StateId};

/// One ladder: its positions (lowest tier first) and alternate names.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LadderSpec {
    pub kind: LadderKind,
    pub positions: Vec<StateId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: Vec<String>,
}

/// Explicit strong/weak lists for one ladder on the advantage axis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSpec {
    pub kind: LadderKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub strong: Vec<LadderKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weak: Vec<LadderKind>,
}

/// Secondary ladders derived from a primary ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairSpec {
    pub kind: LadderKind,
    /// Ladder that plays to the primary ladder's strength.
    pub reinforcing: LadderKind,
    /// Ladder that covers the primary ladder's weakness.
    pub offsetting: LadderKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LadderTable {
    pub ladders: Vec<LadderSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub axis: Vec<AxisSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pairs: Vec<PairSpec>,
}

impl LadderSpec {
    pub fn new(kind: LadderKind, positions: &[u16]) -> Self {
        Self {
            kind,
            positions: positions.iter().copied().map(StateId).collect(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|alias| (*alias).to_owned()).collect();
        self
    }
}

impl LadderTable {
    /// The built-in ladder catalogue.
    ///
    /// Emotions climb from neutral only; stat buffs run from the strongest
    /// debuff through neutral to the strongest buff.
    pub fn standard() -> Self {
        use LadderKind::*;

        Self {
            ladders: vec![
                LadderSpec::new(Sad, &[0, 10, 11, 12]),
                LadderSpec::new(Angry, &[0, 14, 15, 16]),
                LadderSpec::new(Happy, &[0, 6, 7, 8]),
                LadderSpec::new(Afraid, &[0, 18]),
                LadderSpec::new(Atk, &[94, 93, 92, 0, 89, 90, 91]).with_aliases(&["attack"]),
                LadderSpec::new(Def, &[100, 99, 98, 0, 95, 96, 97]).with_aliases(&["defense"]),
                LadderSpec::new(Spd, &[106, 105, 104, 0, 101, 102, 103])
                    .with_aliases(&["speed", "agi", "agility"]),
            ],
            axis: vec![
                AxisSpec {
                    kind: Sad,
                    strong: vec![Happy],
                    weak: vec![Angry],
                },
                AxisSpec {
                    kind: Angry,
                    strong: vec![Sad],
                    weak: vec![Happy],
                },
                AxisSpec {
                    kind: Happy,
                    strong: vec![Angry],
                    weak: vec![Sad],
                },
            ],
            pairs: vec![
                PairSpec {
                    kind: Happy,
                    reinforcing: Spd,
                    offsetting: Atk,
                },
                PairSpec {
                    kind: Sad,
                    reinforcing: Def,
                    offsetting: Spd,
                },
                PairSpec {
                    kind: Angry,
                    reinforcing: Atk,
                    offsetting: Def,
                },
            ],
        }
    }

    pub fn ladder(&self, kind: LadderKind) -> Option<&LadderSpec> {
        self.ladders.iter().find(|spec| spec.kind == kind)
    }
}
