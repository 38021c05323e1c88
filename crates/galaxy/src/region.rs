//! Star Sampler: positions for the three star populations of a galaxy.
//!
//! - **Inner core**: an axis-aligned Gaussian blob at the origin
//! - **Outer core**: the same shape with the wider arm spreads, forming a halo
//! - **Spiral arm**: an offset Gaussian seed cloud wrapped onto a logarithmic
//!   spiral, rotated by the arm's phase
//!
//! Every coordinate is an independent [`sample_gaussian`] call, drawn in
//! x, y, z order.

use std::f64::consts::TAU;

use nalgebra::{Point3, Vector2};
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use stellar::sampling::sample_gaussian;

use crate::config::GalaxyConfig;

/// Population a star is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum StarRegion {
    InnerCore,
    OuterCore,
    SpiralArm { arm: usize },
}

/// Sample one star position from `region`.
///
/// Consumes exactly six uniform draws from `rng`.
///
/// # Example
/// ```
/// use galaxy::region::{sample_region, StarRegion};
/// use galaxy::GalaxyConfig;
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let config = GalaxyConfig::default();
/// let star = sample_region(&mut rng, StarRegion::SpiralArm { arm: 1 }, &config);
/// assert!(star.coords.iter().all(|c| c.is_finite()));
/// ```
pub fn sample_region(rng: &mut ChaChaRng, region: StarRegion, config: &GalaxyConfig) -> Point3<f64> {
    match region {
        StarRegion::InnerCore => Point3::new(
            sample_gaussian(rng, 0.0, config.core_radius_x),
            sample_gaussian(rng, 0.0, config.core_radius_y),
            sample_gaussian(rng, 0.0, config.galaxy_thickness),
        ),
        StarRegion::OuterCore => Point3::new(
            sample_gaussian(rng, 0.0, config.arm_spread_x),
            sample_gaussian(rng, 0.0, config.arm_spread_y),
            sample_gaussian(rng, 0.0, config.galaxy_thickness),
        ),
        StarRegion::SpiralArm { arm } => {
            let seed = Point3::new(
                sample_gaussian(rng, config.arm_mean_x, config.arm_spread_x),
                sample_gaussian(rng, config.arm_mean_y, config.arm_spread_y),
                sample_gaussian(rng, 0.0, config.galaxy_thickness),
            );
            spiral_arm_position(
                seed,
                arm_offset(arm, config.arm_count),
                config.arm_spread_x,
                config.spiral_tightness,
            )
        }
    }
}

/// Starting angle of arm `arm` out of `arm_count` evenly spaced arms.
///
/// An `arm_count` of zero is treated as a single arm.
pub fn arm_offset(arm: usize, arm_count: usize) -> f64 {
    arm as f64 * TAU / arm_count.max(1) as f64
}

/// Wrap a seed point onto a logarithmic spiral arm.
///
/// The seed keeps its planar radius `r`. Its angle becomes
/// `offset + atan2(y, x) + (r / length_scale) * tightness`, so the winding
/// grows with distance from the center. `z` passes through unchanged. A zero
/// `length_scale` disables the winding term.
pub fn spiral_arm_position(
    seed: Point3<f64>,
    offset: f64,
    length_scale: f64,
    tightness: f64,
) -> Point3<f64> {
    let planar = Vector2::new(seed.x, seed.y);
    let r = planar.norm();

    let mut theta = offset + seed.y.atan2(seed.x);
    if length_scale > 0.0 {
        theta += (r / length_scale) * tightness;
    }

    Point3::new(r * theta.cos(), r * theta.sin(), seed.z)
}
