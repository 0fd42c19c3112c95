//! Greedy subsequence test with a deletion budget.
//!
//! A slice is producible from a unit when it can be obtained by deleting at
//! most `dmax` symbols from the unit's sequence: no insertions, substitutions
//! or reordering. Every unit symbol that does not end up in the slice counts
//! as a deletion, including the ones left over after the slice is complete.
//!
//! Earliest-match greedy is exact here: taking a match as soon as the unit
//! symbol agrees with the next slice symbol never leaves the slice cursor
//! behind any other alignment, so one forward pass decides it.

use crate::alphabet::Symbol;
use crate::traits::SliceMatcher;
use crate::unit::BasicUnit;

/// The default [`SliceMatcher`]: a single O(unit length) scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyMatcher;

impl SliceMatcher for GreedyMatcher {
    #[inline]
    fn can_produce(&self, unit: &BasicUnit, slice: &[Symbol]) -> bool {
        can_produce(unit, slice)
    }
}

/// True if `slice` is `unit.sequence()` with at most `unit.dmax()` deletions.
pub fn can_produce(unit: &BasicUnit, slice: &[Symbol]) -> bool {
    let seq = unit.sequence();
    // Deletions only shrink, and the total is fixed by the length difference.
    if slice.len() > seq.len() || seq.len() - slice.len() > unit.dmax() {
        return false;
    }
    scan(seq, slice, unit.dmax()).is_some()
}

/// Number of deletions that turn `unit` into `slice`, ignoring the budget.
///
/// `None` when `slice` is not a subsequence of the unit.
pub fn deletions_required(unit: &BasicUnit, slice: &[Symbol]) -> Option<usize> {
    scan(unit.sequence(), slice, usize::MAX)
}

/// Two-cursor scan; bails out as soon as more than `budget` symbols are skipped.
fn scan(seq: &[Symbol], slice: &[Symbol], budget: usize) -> Option<usize> {
    let (mut i, mut j) = (0usize, 0usize);
    let mut deletions = 0usize;
    while i < seq.len() && j < slice.len() {
        if seq[i] == slice[j] {
            j += 1;
        } else {
            deletions += 1;
            if deletions > budget {
                return None;
            }
        }
        i += 1;
    }
    // Unit exhausted first: the rest of the slice can never be produced.
    if j < slice.len() {
        return None;
    }
    deletions += seq.len() - i;
    (deletions <= budget).then_some(deletions)
}
