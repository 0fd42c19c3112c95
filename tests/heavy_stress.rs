#![cfg(feature = "heavy")]
use rand::{rngs::StdRng, Rng, SeedableRng};
use unit_assembly::{AssemblyPlanner, BasicUnit, Symbol};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<Symbol> {
    (0..len)
        .map(|_| Symbol::ALL[rng.gen_range(0..Symbol::ALL.len())])
        .collect()
}

#[test]
fn heavy_stress_random_catalog() {
    let mut rng = StdRng::seed_from_u64(123);
    let target = random_dna(&mut rng, 100_000);
    let mut catalog: Vec<BasicUnit> = Symbol::ALL
        .iter()
        .map(|&s| BasicUnit::new(vec![s], 10, 0).unwrap())
        .collect();
    for _ in 0..32 {
        let len = rng.gen_range(4..16);
        let seq = random_dna(&mut rng, len);
        let dmax = rng.gen_range(0..len / 2);
        catalog.push(BasicUnit::new(seq, rng.gen_range(5..40), dmax).unwrap());
    }
    let planner = AssemblyPlanner::new(catalog).unwrap();
    let a = planner.solve(&target).unwrap().expect("single symbols cover any target");
    // Singles alone cost 10 per symbol; longer units can only help.
    assert!(a.cost <= 10 * target.len() as u64);
    assert_eq!(a.placements.len(), a.units);
    assert_eq!(a.placements.last().map(|p| p.end), Some(target.len()));
}
