//! Inter-ladder relations: the advantage axis and paired secondary ladders.
//!
//! Relations are stored exactly as declared. Nothing is derived: if `sad` is
//! strong against `happy`, `happy` is only weak against `sad` when the table
//! says so.

use crate::ladder::{LadderKind, LadderSet};

/// Strong/weak sets of one ladder. Both empty outside the axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisRelation {
    pub strong: LadderSet,
    pub weak: LadderSet,
}

impl AxisRelation {
    pub fn is_on_axis(&self) -> bool {
        !self.strong.is_empty() || !self.weak.is_empty()
    }
}

/// Secondary ladders of a primary ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LadderPair {
    pub reinforcing: LadderKind,
    pub offsetting: LadderKind,
}
