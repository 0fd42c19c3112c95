//! DP table used by the planner.
//!
//! Entry `i` holds the best known way to realise the first `i` target symbols.
//! Unreached positions are `None` rather than a numeric infinity.

/// A `(cost, units)` pair, ordered lexicographically: cheaper first, then
/// fewer units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tally {
    pub cost: u64,
    pub units: usize,
}

impl Tally {
    /// The empty prefix: nothing to pay, nothing used.
    pub const ZERO: Tally = Tally { cost: 0, units: 0 };

    /// Tally after appending one more unit of `cost`; `None` on overflow.
    #[inline]
    pub fn extend(self, cost: u64) -> Option<Tally> {
        Some(Tally {
            cost: self.cost.checked_add(cost)?,
            units: self.units + 1,
        })
    }
}

/// The transition that produced an entry: catalog index and slice start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackPointer {
    pub unit: usize,
    pub start: usize,
}

/// One DP entry with the transition that set it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub tally: Tally,
    pub from: Option<BackPointer>,
}

/// Forward DP table over positions `0..=n`.
///
/// Invariants:
/// - entry 0 is `Tally::ZERO` with no back-pointer;
/// - entries only change through [`DpTable::offer`], and only towards a
///   lexicographically smaller tally.
#[derive(Debug, Clone)]
pub struct DpTable {
    entries: Vec<Option<Entry>>,
}

impl DpTable {
    /// Fresh table for a target of length `n`.
    pub fn new(n: usize) -> Self {
        let mut entries = vec![None; n + 1];
        entries[0] = Some(Entry {
            tally: Tally::ZERO,
            from: None,
        });
        Self { entries }
    }

    /// Target length `n` this table covers.
    #[inline]
    pub fn target_len(&self) -> usize {
        self.entries.len() - 1
    }

    #[inline]
    pub fn get(&self, pos: usize) -> Option<&Entry> {
        self.entries[pos].as_ref()
    }

    #[inline]
    pub fn tally(&self, pos: usize) -> Option<Tally> {
        self.entries[pos].map(|e| e.tally)
    }

    /// Offer a candidate for `pos`. It replaces the current entry only when
    /// its tally is strictly smaller, so the first of several equal candidates
    /// is kept. Returns whether the entry changed.
    pub fn offer(&mut self, pos: usize, tally: Tally, from: BackPointer) -> bool {
        debug_assert!(pos > 0, "position 0 is fixed");
        if self.entries[pos].is_some_and(|current| current.tally <= tally) {
            return false;
        }
        self.entries[pos] = Some(Entry {
            tally,
            from: Some(from),
        });
        true
    }

    /// Final answer, if the whole target is reachable.
    #[inline]
    pub fn terminal(&self) -> Option<Tally> {
        self.tally(self.target_len())
    }

    /// Walk back-pointers from the end of the target to position 0.
    ///
    /// Returns the transitions in target order, or `None` when the end is
    /// unreachable.
    pub fn trace_back(&self) -> Option<Vec<(BackPointer, usize)>> {
        let mut pos = self.target_len();
        if self.entries[pos].is_none() {
            return None;
        }
        let mut steps = Vec::new();
        while let Some(from) = self.entries[pos].and_then(|e| e.from) {
            steps.push((from, pos));
            pos = from.start;
        }
        debug_assert_eq!(pos, 0, "back-pointer chain must end at position 0");
        steps.reverse();
        Some(steps)
    }
}
