//! Minimum-cost assembly of a target sequence from trimmable basic units.
//!
//! A catalog holds *basic units*: short `ACGT` sequences, each with a
//! manufacturing cost and a deletion budget `dmax`. A unit may be trimmed into
//! any slice obtainable by deleting at most `dmax` of its symbols. The planner
//! finds the cheapest way to write the target as a concatenation of trimmed
//! units (no gaps, no overlaps) and, among the cheapest, the one using the
//! fewest units.
//!
//! ## Core idea
//! 1. [`matcher`] answers "can this unit become this slice?" with one greedy
//!    forward scan.
//! 2. [`planner`] runs a forward DP over target positions, folding feasible
//!    transitions into a table ordered by `(cost, units)`.
//! 3. The table's back-pointers give the actual placements.
//!
//! ## Quick start
//! ```
//! use unit_assembly::{parse_sequence, solve, BasicUnit};
//!
//! let catalog = vec![
//!     BasicUnit::parse("A", 2, 0).unwrap(),
//!     BasicUnit::parse("C", 3, 0).unwrap(),
//!     BasicUnit::parse("G", 4, 0).unwrap(),
//!     BasicUnit::parse("T", 5, 0).unwrap(),
//!     BasicUnit::parse("ACGT", 10, 1).unwrap(),
//!     BasicUnit::parse("CGTA", 12, 1).unwrap(),
//! ];
//! let target = parse_sequence(b"ACGTACGTA").unwrap();
//! let assembly = solve(&target, &catalog).unwrap().expect("assemblable");
//! assert_eq!((assembly.cost, assembly.units), (22, 3));
//! ```
//!
//! `Ok(None)` means no assembly exists; `Err` is reserved for malformed input.
//!
//! ## Features
//! - `parallel`: evaluate the candidates of each position with `rayon`.
//! - `tracing`: emit spans and events for the sweep.

pub mod alphabet;
pub mod builder;
pub mod error;
pub mod matcher;
pub mod planner;
pub mod table;
pub mod traits;
pub mod unit;

pub use crate::alphabet::{parse_sequence, Symbol};
pub use crate::builder::PlannerBuilder;
pub use crate::error::AssemblyError;
pub use crate::matcher::GreedyMatcher;
pub use crate::planner::{solve, Assembly, AssemblyPlanner, Placement};
pub use crate::table::Tally;
pub use crate::traits::SliceMatcher;
pub use crate::unit::BasicUnit;
