//! Forward DP over target positions.
//!
//! Position `i` is settled from positions `start < i` only, so a single left
//! to right sweep visits the positions in topological order. For every `i`,
//! every unit and every slice `target[start..i]` no longer than the unit is
//! checked with the [`SliceMatcher`]; feasible transitions are folded into the
//! table with the lexicographic `(cost, units)` rule.
//!
//! Cost is `O(n · |catalog| · L)` matcher calls of `O(L)` each, `L` being the
//! longest unit, and `O(n)` extra space.

use crate::alphabet::{parse_sequence, Symbol};
use crate::error::AssemblyError;
use crate::matcher::GreedyMatcher;
use crate::table::{BackPointer, DpTable, Tally};
use crate::traits::SliceMatcher;
use crate::unit::{max_unit_len, BasicUnit};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One unit of an assembly: catalog index and the target slice `[start, end)`
/// it was trimmed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub unit: usize,
    pub start: usize,
    pub end: usize,
}

impl Placement {
    /// Length of the covered target slice.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A cost-minimal assembly that, among those, uses the fewest units.
///
/// `placements` tile the target left to right without gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub cost: u64,
    pub units: usize,
    pub placements: Vec<Placement>,
}

impl Assembly {
    /// The `(cost, units)` pair alone.
    #[inline]
    pub fn tally(&self) -> Tally {
        Tally {
            cost: self.cost,
            units: self.units,
        }
    }
}

/// Planner over a fixed, non-empty catalog.
///
/// ```
/// use unit_assembly::{AssemblyPlanner, BasicUnit};
///
/// let catalog = vec![
///     BasicUnit::parse("A", 2, 0).unwrap(),
///     BasicUnit::parse("C", 3, 0).unwrap(),
///     BasicUnit::parse("G", 4, 0).unwrap(),
///     BasicUnit::parse("T", 5, 0).unwrap(),
///     BasicUnit::parse("ACGT", 10, 0).unwrap(),
/// ];
/// let planner = AssemblyPlanner::new(catalog).unwrap();
/// let assembly = planner.solve_text("ACGT").unwrap().expect("assemblable");
/// assert_eq!((assembly.cost, assembly.units), (10, 1));
/// ```
#[derive(Debug, Clone)]
pub struct AssemblyPlanner<M: SliceMatcher = GreedyMatcher> {
    catalog: Vec<BasicUnit>,
    matcher: M,
}

impl AssemblyPlanner<GreedyMatcher> {
    /// Planner using the greedy deletion matcher.
    pub fn new(catalog: Vec<BasicUnit>) -> Result<Self, AssemblyError> {
        Self::with_matcher(catalog, GreedyMatcher)
    }
}

impl<M: SliceMatcher> AssemblyPlanner<M> {
    /// Planner using a caller-supplied feasibility oracle.
    pub fn with_matcher(catalog: Vec<BasicUnit>, matcher: M) -> Result<Self, AssemblyError> {
        if catalog.is_empty() {
            return Err(AssemblyError::EmptyCatalog);
        }
        Ok(Self { catalog, matcher })
    }

    pub fn catalog(&self) -> &[BasicUnit] {
        &self.catalog
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Longest unit in the catalog; no slice longer than this is ever tried.
    pub fn max_unit_len(&self) -> usize {
        max_unit_len(&self.catalog)
    }

    /// Cheapest assembly of `target`, or `Ok(None)` if none exists.
    pub fn solve(&self, target: &[Symbol]) -> Result<Option<Assembly>, AssemblyError> {
        let table = self.fill_table(target)?;
        Ok(extract_assembly(&table))
    }

    /// Parse `target` and solve it.
    pub fn solve_text(&self, target: &str) -> Result<Option<Assembly>, AssemblyError> {
        let target = parse_sequence(target.as_bytes())?;
        self.solve(&target)
    }

    /// Run the sweep and hand back the whole table.
    pub fn fill_table(&self, target: &[Symbol]) -> Result<DpTable, AssemblyError> {
        sweep(&self.catalog, &self.matcher, target)
    }
}

/// Solve with the greedy matcher without building a planner.
///
/// An empty catalog is accepted here: it can only assemble the empty target.
pub fn solve(target: &[Symbol], catalog: &[BasicUnit]) -> Result<Option<Assembly>, AssemblyError> {
    let table = sweep(catalog, &GreedyMatcher, target)?;
    Ok(extract_assembly(&table))
}

/// Fill a fresh table for `target`.
///
/// Candidates whose cost would overflow `u64` are skipped; they can never beat
/// one that fits. `saturated[i]` marks positions that only such candidates
/// reach, and the sweep reports [`AssemblyError::CostOverflow`] only when the
/// whole target is one of them.
pub(crate) fn sweep<M: SliceMatcher>(
    catalog: &[BasicUnit],
    matcher: &M,
    target: &[Symbol],
) -> Result<DpTable, AssemblyError> {
    let n = target.len();
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("assembly_sweep", n, catalog = catalog.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut table = DpTable::new(n);
    let mut saturated = vec![false; n + 1];
    for i in 1..=n {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("relax_position", i);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        let overflowed = relax_position(catalog, matcher, target, &mut table, &saturated, i);
        saturated[i] = overflowed && table.tally(i).is_none();
    }

    if saturated[n] {
        #[cfg(feature = "tracing")]
        tracing::debug!("every assembly of the target overflows the cost");
        return Err(AssemblyError::CostOverflow { position: n });
    }

    #[cfg(feature = "tracing")]
    match table.terminal() {
        Some(t) => tracing::debug!(cost = t.cost, units = t.units, "target assembled"),
        None => tracing::debug!("no assembly covers the target"),
    }
    Ok(table)
}

/// Settle entry `i` by offering every feasible transition in catalog order,
/// then ascending start. Returns whether a feasible transition overflowed.
#[cfg(not(feature = "parallel"))]
fn relax_position<M: SliceMatcher>(
    catalog: &[BasicUnit],
    matcher: &M,
    target: &[Symbol],
    table: &mut DpTable,
    saturated: &[bool],
    i: usize,
) -> bool {
    let mut overflowed = false;
    for (u, unit) in catalog.iter().enumerate() {
        for start in i.saturating_sub(unit.len())..i {
            let prev = table.tally(start);
            if prev.is_none() && !saturated[start] {
                continue;
            }
            if !matcher.can_produce(unit, &target[start..i]) {
                continue;
            }
            let Some(tally) = prev.and_then(|p| p.extend(unit.cost())) else {
                overflowed = true;
                continue;
            };
            if table.offer(i, tally, BackPointer { unit: u, start }) {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    i,
                    unit = u,
                    start,
                    cost = tally.cost,
                    units = tally.units,
                    "improved"
                );
            }
        }
    }
    overflowed
}

/// Settle entry `i` by evaluating all `(unit, start)` pairs in parallel.
///
/// Workers only read entries `< i`. The winner is the minimum of
/// `(tally, unit, start)`, which is exactly the candidate the serial sweep
/// keeps, and it is written once after the reduction.
#[cfg(feature = "parallel")]
fn relax_position<M: SliceMatcher>(
    catalog: &[BasicUnit],
    matcher: &M,
    target: &[Symbol],
    table: &mut DpTable,
    saturated: &[bool],
    i: usize,
) -> bool {
    let settled: &DpTable = table;
    let (best, overflowed) = catalog
        .par_iter()
        .enumerate()
        .flat_map_iter(|(u, unit)| {
            (i.saturating_sub(unit.len())..i).map(move |start| (u, unit, start))
        })
        .filter_map(|(u, unit, start)| {
            let prev = settled.tally(start);
            if prev.is_none() && !saturated[start] {
                return None;
            }
            if !matcher.can_produce(unit, &target[start..i]) {
                return None;
            }
            Some(prev.and_then(|p| p.extend(unit.cost())).map(|tally| (tally, u, start)))
        })
        .map(|candidate| (candidate, candidate.is_none()))
        .reduce(
            || (None, false),
            |(a, a_over), (b, b_over)| {
                let best = match (a, b) {
                    (Some(x), Some(y)) => Some(x.min(y)),
                    (x, None) | (None, x) => x,
                };
                (best, a_over || b_over)
            },
        );

    if let Some((tally, unit, start)) = best {
        table.offer(i, tally, BackPointer { unit, start });
        #[cfg(feature = "tracing")]
        tracing::trace!(i, unit, start, cost = tally.cost, units = tally.units, "settled");
    }
    overflowed
}

/// Turn a filled table into an [`Assembly`], `None` if the end is unreached.
pub fn extract_assembly(table: &DpTable) -> Option<Assembly> {
    let tally = table.terminal()?;
    let placements = table
        .trace_back()?
        .into_iter()
        .map(|(from, end)| Placement {
            unit: from.unit,
            start: from.start,
            end,
        })
        .collect();
    Some(Assembly {
        cost: tally.cost,
        units: tally.units,
        placements,
    })
}
