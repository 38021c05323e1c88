//! Galaxy Generator: fills a point cloud from a configuration snapshot.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::debug;

use crate::config::GalaxyConfig;
use crate::partition::RegionPlan;
use crate::point_cloud::GalaxyPointCloud;
use crate::region::sample_region;

/// Generate a complete galaxy point cloud.
///
/// The config is sanitized first, so any input produces a cloud. Stars are
/// emitted inner core first, then outer core, then each arm in turn (see
/// [`RegionPlan`]). Each star consumes six draws for its position followed by
/// one for its spectral class.
///
/// # Example
/// ```
/// use galaxy::{generate, GalaxyConfig};
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let config = GalaxyConfig {
///     star_count: 1_000,
///     ..GalaxyConfig::default()
/// };
///
/// let cloud = generate(&config, &mut rng);
/// assert_eq!(cloud.len(), 1_000);
/// assert_eq!(cloud.flat_positions().len(), 3_000);
/// ```
pub fn generate(config: &GalaxyConfig, rng: &mut ChaChaRng) -> GalaxyPointCloud {
    let config = config.sanitized();
    let plan = RegionPlan::new(config.star_count, config.arm_count);
    let mut cloud = GalaxyPointCloud::with_capacity(plan.total());

    for region in plan.regions() {
        let position = sample_region(rng, region, &config);
        let class = config.star_types.classify(rng);
        cloud.push(position, class);
    }

    debug!(
        stars = cloud.len(),
        inner_core = plan.inner_core,
        outer_core = plan.outer_core,
        arms = plan.arms.len(),
        "generated galaxy"
    );

    cloud
}

/// Owns the random stream and the most recent point cloud.
///
/// Each [`regenerate`](Self::regenerate) rebuilds the whole cloud from scratch
/// and drops the previous one.
#[derive(Debug, Clone)]
pub struct GalaxyGenerator {
    rng: ChaChaRng,
    current: Option<GalaxyPointCloud>,
    generation: u64,
}

impl GalaxyGenerator {
    pub fn new(rng: ChaChaRng) -> Self {
        Self {
            rng,
            current: None,
            generation: 0,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaChaRng::seed_from_u64(seed))
    }

    /// Replace the current cloud with a freshly generated one
    pub fn regenerate(&mut self, config: &GalaxyConfig) -> &GalaxyPointCloud {
        if let Some(previous) = self.current.take() {
            debug!(
                generation = self.generation,
                stars = previous.len(),
                "discarding previous galaxy"
            );
        }

        self.generation += 1;
        self.current.insert(generate(config, &mut self.rng))
    }

    /// Most recent cloud, if any
    pub fn current(&self) -> Option<&GalaxyPointCloud> {
        self.current.as_ref()
    }

    /// Hand the current cloud to the caller, leaving none behind
    pub fn take(&mut self) -> Option<GalaxyPointCloud> {
        self.current.take()
    }

    /// Number of clouds generated so far
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
