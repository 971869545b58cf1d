//! Ladder data model: kinds, markers, definitions and declarative tables.

mod definition;
mod kind;
mod marker;
mod table;

pub use definition::Ladder;
pub use kind::{LadderCategory, LadderKind, LadderSet};
pub use marker::{StateId, Tier};
pub use table::{AxisSpec, LadderSpec, LadderTable, PairSpec};
