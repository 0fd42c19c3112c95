//! Example: assemble two small targets and print the chosen placements.
//!
//! Run with:
//! `cargo run --example catalogs`

use unit_assembly::{alphabet, AssemblyError, AssemblyPlanner, BasicUnit};

fn main() -> Result<(), AssemblyError> {
    let mixed = vec![
        BasicUnit::parse("A", 2, 0)?,
        BasicUnit::parse("C", 3, 0)?,
        BasicUnit::parse("G", 4, 0)?,
        BasicUnit::parse("T", 5, 0)?,
        BasicUnit::parse("ACGT", 10, 1)?,
        BasicUnit::parse("CGTA", 12, 1)?,
    ];
    report("Example 1", "ACGTACGTA", AssemblyPlanner::new(mixed)?)?;

    let exact = vec![
        BasicUnit::parse("A", 2, 0)?,
        BasicUnit::parse("C", 3, 0)?,
        BasicUnit::parse("G", 4, 0)?,
        BasicUnit::parse("T", 5, 0)?,
        BasicUnit::parse("ACGT", 10, 0)?,
    ];
    report("Example 2", "ACGT", AssemblyPlanner::new(exact)?)?;
    Ok(())
}

fn report(label: &str, target: &str, planner: AssemblyPlanner) -> Result<(), AssemblyError> {
    match planner.solve_text(target)? {
        None => println!("{label}: no assembly of {target}"),
        Some(assembly) => {
            println!("{label}: P={}, U={}", assembly.cost, assembly.units);
            for p in &assembly.placements {
                let unit = &planner.catalog()[p.unit];
                println!(
                    "  [{:>2}, {:>2})  {:<6} <- {} (cost {}, dmax {})",
                    p.start,
                    p.end,
                    &target[p.start..p.end],
                    alphabet::to_string(unit.sequence()),
                    unit.cost(),
                    unit.dmax()
                );
            }
        }
    }
    Ok(())
}
