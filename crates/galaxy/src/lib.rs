//! Procedural spiral galaxy point clouds.
//!
//! Stars are drawn from three populations (inner core, outer core halo and
//! logarithmic spiral arms), classified by spectral type for color, and
//! packed into GPU-ready buffers.

pub mod config;
pub mod error;
pub mod generation;
pub mod partition;
pub mod point_cloud;
pub mod region;

#[cfg(test)]
mod partition_test;
#[cfg(test)]
mod point_cloud_test;

pub use config::GalaxyConfig;
pub use error::ConfigError;
pub use generation::{generate, GalaxyGenerator};
pub use partition::RegionPlan;
pub use point_cloud::GalaxyPointCloud;
pub use region::{arm_offset, sample_region, spiral_arm_position, StarRegion};
