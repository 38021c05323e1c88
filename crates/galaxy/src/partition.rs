use serde::{Deserialize, Serialize};

use crate::region::StarRegion;

/// How many stars each region receives.
///
/// A quarter of the stars go to the inner core and a quarter to the outer
/// core (both rounded down). The rest is split across the arms; arms with a
/// lower index take one extra star each until the remainder is used up, so
/// the plan always totals exactly `star_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPlan {
    pub inner_core: usize,
    pub outer_core: usize,
    /// Star count per arm, indexed by arm
    pub arms: Vec<usize>,
}

impl RegionPlan {
    pub fn new(star_count: usize, arm_count: usize) -> Self {
        let arm_count = arm_count.max(1);
        let inner_core = star_count / 4;
        let outer_core = star_count / 4;

        let arm_stars = star_count - inner_core - outer_core;
        let per_arm = arm_stars / arm_count;
        let remainder = arm_stars % arm_count;

        let arms = (0..arm_count)
            .map(|arm| per_arm + usize::from(arm < remainder))
            .collect();

        Self {
            inner_core,
            outer_core,
            arms,
        }
    }

    pub fn total(&self) -> usize {
        self.inner_core + self.outer_core + self.arms.iter().sum::<usize>()
    }

    /// Regions in generation order: inner core, outer core, then arm 0, arm 1, ...
    pub fn regions(&self) -> impl Iterator<Item = StarRegion> + '_ {
        let inner = std::iter::repeat(StarRegion::InnerCore).take(self.inner_core);
        let outer = std::iter::repeat(StarRegion::OuterCore).take(self.outer_core);
        let arms = self
            .arms
            .iter()
            .enumerate()
            .flat_map(|(arm, &count)| std::iter::repeat(StarRegion::SpiralArm { arm }).take(count));

        inner.chain(outer).chain(arms)
    }
}
