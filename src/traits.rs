//! The feasibility oracle the planner is generic over.
//!
//! The planner only ever asks one question: can this unit be trimmed into this
//! slice of the target? Implement [`SliceMatcher`] to change how that is
//! answered (for instance to add extra exclusions) without touching the DP.
//! [`GreedyMatcher`](crate::matcher::GreedyMatcher) is the default.

use crate::alphabet::Symbol;
use crate::unit::BasicUnit;

/// Decides whether a target slice is producible from a unit.
///
/// Contract:
/// - Must be a pure function of `(unit, slice)`; the planner may call it any
///   number of times, in any order, and from several threads under the
///   `parallel` feature.
/// - The planner only passes non-empty slices no longer than `unit.len()`.
/// - Raising `unit.dmax()` must never turn `true` into `false`.
pub trait SliceMatcher: Sync {
    fn can_produce(&self, unit: &BasicUnit, slice: &[Symbol]) -> bool;
}

impl<M: SliceMatcher + ?Sized> SliceMatcher for &M {
    #[inline]
    fn can_produce(&self, unit: &BasicUnit, slice: &[Symbol]) -> bool {
        (**self).can_produce(unit, slice)
    }
}
