//! Applying a resolution to a marker store.

use ladder_core::ResolutionResult;

use crate::battler::MarkerStore;

/// Removes the replaced marker and adds the new one. No-op results touch
/// nothing.
pub fn apply_resolution<S>(store: &mut S, result: &ResolutionResult)
where
    S: MarkerStore + ?Sized,
{
    if let Some(old) = result.removed() {
        store.remove_marker(old);
    }
    if let Some(new) = result.added() {
        store.add_marker(new);
    }
}
