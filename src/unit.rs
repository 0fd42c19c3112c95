//! Basic units: the reusable building blocks an assembly is made of.

use crate::alphabet::{parse_sequence, Symbol};
use crate::error::AssemblyError;

/// A unit sequence with its manufacturing cost and deletion budget.
///
/// Immutable once built; the sequence is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasicUnit {
    sequence: Vec<Symbol>,
    cost: u64,
    dmax: usize,
}

impl BasicUnit {
    /// Build a unit, rejecting an empty sequence.
    pub fn new(sequence: Vec<Symbol>, cost: u64, dmax: usize) -> Result<Self, AssemblyError> {
        if sequence.is_empty() {
            return Err(AssemblyError::EmptyUnit);
        }
        Ok(Self {
            sequence,
            cost,
            dmax,
        })
    }

    /// Parse the sequence from text, e.g. `BasicUnit::parse("ACGT", 10, 1)`.
    pub fn parse(sequence: &str, cost: u64, dmax: usize) -> Result<Self, AssemblyError> {
        Self::new(parse_sequence(sequence.as_bytes())?, cost, dmax)
    }

    #[inline]
    pub fn sequence(&self) -> &[Symbol] {
        &self.sequence
    }

    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Maximum number of symbols that may be deleted when trimming.
    #[inline]
    pub fn dmax(&self) -> usize {
        self.dmax
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always false for a constructed unit; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Shortest slice this unit can be trimmed down to.
    #[inline]
    pub fn min_slice_len(&self) -> usize {
        self.len().saturating_sub(self.dmax).max(1)
    }
}

/// Longest unit in a catalog, 0 when empty.
pub fn max_unit_len(catalog: &[BasicUnit]) -> usize {
    catalog.iter().map(BasicUnit::len).max().unwrap_or(0)
}
