use crate::partition::RegionPlan;
use crate::region::StarRegion;

#[test]
fn even_split_with_two_arms() {
    let plan = RegionPlan::new(10_000, 2);

    assert_eq!(plan.inner_core, 2_500);
    assert_eq!(plan.outer_core, 2_500);
    assert_eq!(plan.arms, vec![2_500, 2_500]);
    assert_eq!(plan.total(), 10_000);
}

#[test]
fn arm_half_is_shared_across_arms() {
    let plan = RegionPlan::new(1_000, 4);

    assert_eq!(plan.inner_core, 250);
    assert_eq!(plan.outer_core, 250);
    assert_eq!(plan.arms, vec![125; 4]);
}

#[test]
fn remainders_go_to_lower_arms() {
    // 10 stars: 2 inner, 2 outer, 6 across 4 arms
    let plan = RegionPlan::new(10, 4);

    assert_eq!(plan.inner_core, 2);
    assert_eq!(plan.outer_core, 2);
    assert_eq!(plan.arms, vec![2, 2, 1, 1]);
    assert_eq!(plan.total(), 10);
}

#[test]
fn total_always_matches_star_count() {
    for star_count in 0..200 {
        for arm_count in 1..=9 {
            let plan = RegionPlan::new(star_count, arm_count);
            assert_eq!(
                plan.total(),
                star_count,
                "star_count {} arm_count {}",
                star_count,
                arm_count
            );
            assert_eq!(plan.arms.len(), arm_count);
        }
    }
}

#[test]
fn small_counts_fill_arms_before_cores() {
    let plan = RegionPlan::new(3, 2);

    assert_eq!(plan.inner_core, 0);
    assert_eq!(plan.outer_core, 0);
    assert_eq!(plan.arms, vec![2, 1]);
}

#[test]
fn zero_stars_gives_empty_plan() {
    let plan = RegionPlan::new(0, 3);

    assert_eq!(plan.total(), 0);
    assert_eq!(plan.regions().count(), 0);
}

#[test]
fn zero_arms_treated_as_one() {
    let plan = RegionPlan::new(8, 0);
    assert_eq!(plan.arms, vec![4]);
}

#[test]
fn regions_follow_generation_order() {
    let plan = RegionPlan::new(4, 1);
    let regions: Vec<StarRegion> = plan.regions().collect();

    assert_eq!(
        regions,
        vec![
            StarRegion::InnerCore,
            StarRegion::OuterCore,
            StarRegion::SpiralArm { arm: 0 },
            StarRegion::SpiralArm { arm: 0 },
        ]
    );
}

#[test]
fn regions_visit_arms_in_index_order() {
    let plan = RegionPlan::new(9, 3);
    let arms: Vec<usize> = plan
        .regions()
        .filter_map(|region| match region {
            StarRegion::SpiralArm { arm } => Some(arm),
            _ => None,
        })
        .collect();

    // 9 stars: 2 inner, 2 outer, 5 across 3 arms
    assert_eq!(arms, vec![0, 0, 1, 1, 2]);
}
