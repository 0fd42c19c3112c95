use crate::error::AssemblyError;
use crate::matcher::GreedyMatcher;
use crate::traits::SliceMatcher;
use crate::unit::BasicUnit;
use crate::AssemblyPlanner;

/// Accumulates a catalog and an optional matcher, validating on `build`.
pub struct PlannerBuilder<M: SliceMatcher = GreedyMatcher> {
    catalog: Vec<BasicUnit>,
    matcher: M,
}

impl PlannerBuilder<GreedyMatcher> {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            matcher: GreedyMatcher,
        }
    }
}

impl Default for PlannerBuilder<GreedyMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SliceMatcher> PlannerBuilder<M> {
    pub fn unit(mut self, unit: BasicUnit) -> Self {
        self.catalog.push(unit);
        self
    }
    pub fn units<I: IntoIterator<Item = BasicUnit>>(mut self, units: I) -> Self {
        self.catalog.extend(units);
        self
    }
    pub fn with_matcher<N: SliceMatcher>(self, matcher: N) -> PlannerBuilder<N> {
        PlannerBuilder {
            catalog: self.catalog,
            matcher,
        }
    }
    pub fn build(self) -> Result<AssemblyPlanner<M>, AssemblyError> {
        AssemblyPlanner::with_matcher(self.catalog, self.matcher)
    }
}
