use proptest::prelude::*;
use unit_assembly::{matcher, parse_sequence, AssemblyPlanner, BasicUnit, Symbol};

fn unit_strategy() -> impl Strategy<Value = BasicUnit> {
    ("[ACGT]{1,6}", 1u64..15, 0usize..4)
        .prop_map(|(s, cost, dmax)| BasicUnit::parse(&s, cost, dmax).unwrap())
}

fn check_placements(planner: &AssemblyPlanner, target: &[Symbol]) -> Result<(), TestCaseError> {
    let Some(a) = planner.solve(target).unwrap() else {
        return Ok(());
    };
    prop_assert_eq!(a.placements.len(), a.units);
    let mut pos = 0;
    let mut cost = 0u64;
    for p in &a.placements {
        prop_assert_eq!(p.start, pos, "gap or overlap");
        prop_assert!(!p.is_empty());
        let unit = &planner.catalog()[p.unit];
        prop_assert!(p.len() <= unit.len());
        prop_assert!(matcher::can_produce(unit, &target[p.start..p.end]));
        cost += unit.cost();
        pos = p.end;
    }
    prop_assert_eq!(pos, target.len());
    prop_assert_eq!(cost, a.cost);
    Ok(())
}

proptest! {
    #[test]
    fn placements_reconstruct_the_answer(
        t in "[ACGT]{0,24}",
        catalog in prop::collection::vec(unit_strategy(), 1..7),
    ) {
        let planner = AssemblyPlanner::new(catalog).unwrap();
        let target = parse_sequence(t.as_bytes()).unwrap();
        check_placements(&planner, &target)?;
    }

    #[test]
    fn raising_every_dmax_never_hurts(
        t in "[ACGT]{1,16}",
        catalog in prop::collection::vec(unit_strategy(), 1..6),
    ) {
        let target = parse_sequence(t.as_bytes()).unwrap();
        let loose: Vec<BasicUnit> = catalog
            .iter()
            .map(|u| BasicUnit::new(u.sequence().to_vec(), u.cost(), u.dmax() + 1).unwrap())
            .collect();
        let tight = AssemblyPlanner::new(catalog).unwrap().solve(&target).unwrap();
        let loose = AssemblyPlanner::new(loose).unwrap().solve(&target).unwrap();
        match (tight, loose) {
            (Some(a), Some(b)) => prop_assert!(b.tally() <= a.tally()),
            (Some(_), None) => prop_assert!(false, "looser budget lost the assembly"),
            _ => {}
        }
    }

    #[test]
    fn catalog_order_does_not_change_the_optimum(
        t in "[ACGT]{0,16}",
        catalog in prop::collection::vec(unit_strategy(), 1..6),
    ) {
        let target = parse_sequence(t.as_bytes()).unwrap();
        let mut reversed = catalog.clone();
        reversed.reverse();
        let a = AssemblyPlanner::new(catalog).unwrap().solve(&target).unwrap();
        let b = AssemblyPlanner::new(reversed).unwrap().solve(&target).unwrap();
        prop_assert_eq!(a.map(|x| x.tally()), b.map(|x| x.tally()));
    }
}

#[test]
fn table_is_settled_left_to_right() {
    let planner = AssemblyPlanner::new(vec![
        BasicUnit::parse("AC", 1, 0).unwrap(),
        BasicUnit::parse("GTA", 2, 1).unwrap(),
    ])
    .unwrap();
    let target = parse_sequence(b"ACGTAC").unwrap();
    let table = planner.fill_table(&target).unwrap();
    let reached: Vec<Option<(u64, usize)>> = (0..=target.len())
        .map(|i| table.tally(i).map(|t| (t.cost, t.units)))
        .collect();
    assert_eq!(
        reached,
        vec![
            Some((0, 0)),
            None,
            Some((1, 1)),
            None,
            Some((3, 2)),
            Some((3, 2)),
            Some((4, 3)),
        ]
    );
}
