#![cfg(feature = "parallel")]

use proptest::prelude::*;
use unit_assembly::{parse_sequence, AssemblyPlanner, BasicUnit, Placement, Symbol, Tally};

fn unit_strategy() -> impl Strategy<Value = BasicUnit> {
    ("[ACGT]{1,6}", 0u64..10, 0usize..3)
        .prop_map(|(s, cost, dmax)| BasicUnit::parse(&s, cost, dmax).unwrap())
}

/// Straight serial sweep with the same tie-break: first in catalog order,
/// then ascending start.
fn serial_reference(target: &[Symbol], catalog: &[BasicUnit]) -> Option<(Tally, Vec<Placement>)> {
    let n = target.len();
    let mut best: Vec<Option<(Tally, usize, usize)>> = vec![None; n + 1];
    best[0] = Some((Tally::ZERO, usize::MAX, 0));
    for i in 1..=n {
        for (u, unit) in catalog.iter().enumerate() {
            for start in i.saturating_sub(unit.len())..i {
                let Some((prev, _, _)) = best[start] else {
                    continue;
                };
                if !unit_assembly::matcher::can_produce(unit, &target[start..i]) {
                    continue;
                }
                let cand = Tally {
                    cost: prev.cost + unit.cost(),
                    units: prev.units + 1,
                };
                if best[i].map_or(true, |(b, _, _)| cand < b) {
                    best[i] = Some((cand, u, start));
                }
            }
        }
    }
    let (tally, _, _) = best[n]?;
    let mut placements = Vec::new();
    let mut end = n;
    while end > 0 {
        let (_, unit, start) = best[end]?;
        placements.push(Placement { unit, start, end });
        end = start;
    }
    placements.reverse();
    Some((tally, placements))
}

proptest! {
    #[test]
    fn parallel_sweep_matches_serial(
        t in "[ACGT]{0,40}",
        catalog in prop::collection::vec(unit_strategy(), 1..8),
    ) {
        let target = parse_sequence(t.as_bytes()).unwrap();
        let expected = serial_reference(&target, &catalog);
        let planner = AssemblyPlanner::new(catalog).unwrap();
        let got = planner
            .solve(&target)
            .unwrap()
            .map(|a| (a.tally(), a.placements));
        prop_assert_eq!(got, expected);
    }
}

#[test]
fn parallel_sweep_is_deterministic() {
    let catalog: Vec<BasicUnit> = [("A", 1, 0), ("AC", 2, 0), ("CA", 2, 0), ("ACA", 3, 1)]
        .iter()
        .map(|&(s, c, d)| BasicUnit::parse(s, c, d).unwrap())
        .collect();
    let planner = AssemblyPlanner::new(catalog).unwrap();
    let target: String = "ACA".repeat(200);
    let first = planner.solve_text(&target).unwrap();
    for _ in 0..8 {
        assert_eq!(planner.solve_text(&target).unwrap(), first);
    }
}
