//! Ladder registry: validated, immutable lookup of ladders and relations.
//!
//! The registry is built once from a [`LadderTable`] and a [`LadderConfig`].
//! The combine/split toggle is resolved at build time into concrete half
//! ladders, so lookups never consult the configuration again.
//!
//! A built registry holds no interior mutability and is `Send + Sync`; share
//! it behind an `Arc` without locking.

mod error;
mod relations;

use std::collections::BTreeMap;

pub use error::RegistryError;
pub use relations::{AxisRelation, LadderPair};

use crate::config::LadderConfig;
use crate::ladder::{Ladder, LadderKind, LadderSet, LadderTable, Tier};

/// A registered ladder plus, when split, its two halves.
#[derive(Clone, Debug)]
struct LadderEntry {
    full: Ladder,
    split: Option<SplitHalves>,
}

#[derive(Clone, Debug)]
struct SplitHalves {
    lower: Ladder,
    upper: Ladder,
}

#[derive(Clone, Debug)]
pub struct LadderRegistry {
    entries: [Option<LadderEntry>; LadderKind::COUNT],
    aliases: BTreeMap<String, LadderKind>,
    axis: [AxisRelation; LadderKind::COUNT],
    pairs: [Option<LadderPair>; LadderKind::COUNT],
    config: LadderConfig,
}

impl LadderRegistry {
    /// Validates `table` and builds the registry.
    pub fn build(table: &LadderTable, config: LadderConfig) -> Result<Self, RegistryError> {
        let mut entries: [Option<LadderEntry>; LadderKind::COUNT] =
            core::array::from_fn(|_| None);
        let mut aliases = BTreeMap::new();

        for spec in &table.ladders {
            let slot = &mut entries[spec.kind.as_index()];
            if slot.is_some() {
                return Err(RegistryError::DuplicateLadder(spec.kind));
            }

            let full = Ladder::new(spec.kind, &spec.positions)?;
            let split = (!config.combine_buffs && full.is_bidirectional()).then(|| SplitHalves {
                lower: full.lower_half(),
                upper: full.upper_half(),
            });
            *slot = Some(LadderEntry { full, split });

            if spec.aliases.len() > LadderConfig::MAX_ALIASES_PER_LADDER {
                return Err(RegistryError::InvalidAlias {
                    alias: spec.aliases.join(","),
                    reason: "too many aliases for one ladder",
                });
            }
            for alias in &spec.aliases {
                let alias = alias.to_lowercase();
                if alias.is_empty() {
                    return Err(RegistryError::InvalidAlias {
                        alias,
                        reason: "empty name",
                    });
                }
                if alias.parse::<LadderKind>().is_ok() {
                    return Err(RegistryError::InvalidAlias {
                        alias,
                        reason: "shadows a canonical ladder name",
                    });
                }
                if aliases.insert(alias.clone(), spec.kind).is_some() {
                    return Err(RegistryError::DuplicateAlias(alias));
                }
            }
        }

        let defined = |kind: LadderKind| entries[kind.as_index()].is_some();
        let require = |kind: LadderKind, target: LadderKind| {
            if defined(target) {
                Ok(())
            } else {
                Err(RegistryError::UndefinedRelation { kind, target })
            }
        };

        let mut axis = [AxisRelation::default(); LadderKind::COUNT];
        let mut seen_axis = LadderSet::empty();
        for spec in &table.axis {
            if seen_axis.has(spec.kind) {
                return Err(RegistryError::DuplicateRelation(spec.kind));
            }
            seen_axis |= spec.kind.as_set();
            require(spec.kind, spec.kind)?;

            for &target in spec.strong.iter().chain(&spec.weak) {
                if target == spec.kind {
                    return Err(RegistryError::SelfRelation(spec.kind));
                }
                require(spec.kind, target)?;
            }
            axis[spec.kind.as_index()] = AxisRelation {
                strong: spec.strong.iter().copied().collect(),
                weak: spec.weak.iter().copied().collect(),
            };
        }

        let mut pairs = [None; LadderKind::COUNT];
        for spec in &table.pairs {
            let slot = &mut pairs[spec.kind.as_index()];
            if slot.is_some() {
                return Err(RegistryError::DuplicateRelation(spec.kind));
            }
            require(spec.kind, spec.kind)?;
            for target in [spec.reinforcing, spec.offsetting] {
                if target == spec.kind {
                    return Err(RegistryError::SelfRelation(spec.kind));
                }
                require(spec.kind, target)?;
            }
            *slot = Some(LadderPair {
                reinforcing: spec.reinforcing,
                offsetting: spec.offsetting,
            });
        }

        Ok(Self {
            entries,
            aliases,
            axis,
            pairs,
            config,
        })
    }

    /// Registry over [`LadderTable::standard`].
    pub fn standard(config: LadderConfig) -> Result<Self, RegistryError> {
        Self::build(&LadderTable::standard(), config)
    }

    pub fn config(&self) -> LadderConfig {
        self.config
    }

    /// Normalizes a ladder name: lowercases it and maps alternate names to
    /// canonical ones. Unknown names pass through (lowercased) so the
    /// following lookup reports them.
    pub fn resolve_name(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        match self.aliases.get(&lowered) {
            Some(kind) => kind.as_ref().to_owned(),
            None => lowered,
        }
    }

    /// Resolves `input` (any case, aliases allowed) to a registered kind.
    pub fn lookup(&self, input: &str) -> Result<LadderKind, RegistryError> {
        let canonical = self.resolve_name(input);
        self.canonical_kind(&canonical)
    }

    /// Exact lookup by canonical name.
    pub fn get_ladder(&self, canonical: &str) -> Result<&Ladder, RegistryError> {
        let kind = self.canonical_kind(canonical)?;
        self.ladder(kind)
    }

    /// The full ladder of `kind`, regardless of the combine toggle.
    pub fn ladder(&self, kind: LadderKind) -> Result<&Ladder, RegistryError> {
        self.entry(kind).map(|entry| &entry.full)
    }

    /// The ladder a delta of the given sign actually walks.
    ///
    /// With buffs split, a positive delta walks the upper half and a negative
    /// delta the lower half; a zero delta gets the full ladder.
    pub fn effective_ladder(
        &self,
        kind: LadderKind,
        delta: Tier,
    ) -> Result<&Ladder, RegistryError> {
        let entry = self.entry(kind)?;
        Ok(match (&entry.split, delta.signum()) {
            (Some(halves), 1) => &halves.upper,
            (Some(halves), -1) => &halves.lower,
            _ => &entry.full,
        })
    }

    pub fn is_defined(&self, kind: LadderKind) -> bool {
        self.entries[kind.as_index()].is_some()
    }

    /// Registered kinds in index order.
    pub fn kinds(&self) -> impl Iterator<Item = LadderKind> + '_ {
        LadderKind::all()
            .into_iter()
            .filter(move |kind| self.is_defined(*kind))
    }

    /// Alternate names and the kind each resolves to, sorted by alias.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, LadderKind)> {
        self.aliases.iter().map(|(alias, kind)| (alias.as_str(), *kind))
    }

    /// Ladders `kind` is strong against. Empty outside the axis.
    pub fn strong_against(&self, kind: LadderKind) -> LadderSet {
        self.axis[kind.as_index()].strong
    }

    /// Ladders `kind` is weak against. Empty outside the axis.
    pub fn weak_against(&self, kind: LadderKind) -> LadderSet {
        self.axis[kind.as_index()].weak
    }

    pub fn axis(&self, kind: LadderKind) -> AxisRelation {
        self.axis[kind.as_index()]
    }

    pub fn pair(&self, kind: LadderKind) -> Option<LadderPair> {
        self.pairs[kind.as_index()]
    }

    pub fn reinforcing_ladder(&self, kind: LadderKind) -> Option<LadderKind> {
        self.pair(kind).map(|pair| pair.reinforcing)
    }

    pub fn offsetting_ladder(&self, kind: LadderKind) -> Option<LadderKind> {
        self.pair(kind).map(|pair| pair.offsetting)
    }

    fn canonical_kind(&self, canonical: &str) -> Result<LadderKind, RegistryError> {
        canonical
            .parse::<LadderKind>()
            .ok()
            .filter(|kind| self.is_defined(*kind))
            .ok_or_else(|| RegistryError::UnknownLadder(canonical.to_owned()))
    }

    fn entry(&self, kind: LadderKind) -> Result<&LadderEntry, RegistryError> {
        self.entries[kind.as_index()]
            .as_ref()
            .ok_or_else(|| RegistryError::UnknownLadder(kind.to_string()))
    }
}
