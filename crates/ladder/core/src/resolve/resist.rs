//! Resistance source consulted during fallback.

use crate::ladder::StateId;

/// Answers whether a battler is immune to a marker.
///
/// Owned by the caller and consulted synchronously. The engine never asks
/// about [`StateId::NONE`]; neutral cannot be resisted. Panics raised by an
/// implementation propagate to the caller unchanged.
pub trait Resistance {
    fn is_resisted(&self, marker: StateId) -> bool;
}

impl<F> Resistance for F
where
    F: Fn(StateId) -> bool,
{
    fn is_resisted(&self, marker: StateId) -> bool {
        self(marker)
    }
}

/// Resists nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoResistance;

impl Resistance for NoResistance {
    fn is_resisted(&self, _marker: StateId) -> bool {
        false
    }
}
