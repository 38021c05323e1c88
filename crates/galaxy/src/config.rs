//! Generation parameters.
//!
//! A [`GalaxyConfig`] is the snapshot the parameter panel hands to the
//! generator. Every field has a default, so partial JSON documents are valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use stellar::StarTypeDistribution;
use tracing::warn;

use crate::error::ConfigError;

/// Parameters of a spiral galaxy.
///
/// Lengths are in arbitrary scene units. All spreads are standard deviations of
/// the Gaussian draws used by [`sample_region`](crate::region::sample_region).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalaxyConfig {
    /// Total number of stars
    pub star_count: usize,
    /// Number of spiral arms
    pub arm_count: usize,
    /// Angular wind-up per arm spread of radius (radians)
    pub spiral_tightness: f64,
    pub core_radius_x: f64,
    pub core_radius_y: f64,
    /// Arm and halo spread along x; also the winding length scale
    pub arm_spread_x: f64,
    pub arm_spread_y: f64,
    /// Offset of an arm's seed cloud from the galactic center
    pub arm_mean_x: f64,
    pub arm_mean_y: f64,
    /// Vertical spread of every region
    pub galaxy_thickness: f64,

    // Panel parameters of earlier generator variants. They round-trip through
    // serialization but the logarithmic-spiral sampler does not read them.
    pub density: f64,
    pub noise_factor: f64,
    pub arm_width: f64,
    pub arm_separation: f64,
    pub z_spread: f64,

    /// Spectral class weights
    pub star_types: StarTypeDistribution,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            star_count: 10_000,
            arm_count: 2,
            spiral_tightness: 5.0,
            core_radius_x: 33.0,
            core_radius_y: 33.0,
            arm_spread_x: 100.0,
            arm_spread_y: 50.0,
            arm_mean_x: 200.0,
            arm_mean_y: 100.0,
            galaxy_thickness: 9.0,
            density: 5.0,
            noise_factor: 0.5,
            arm_width: 0.2,
            arm_separation: 0.1,
            z_spread: 0.3,
            star_types: StarTypeDistribution::default(),
        }
    }
}

impl GalaxyConfig {
    /// Largest star count [`sanitized`](Self::sanitized) lets through
    pub const MAX_STAR_COUNT: usize = 1_000_000;
    /// Largest arm count [`sanitized`](Self::sanitized) lets through
    pub const MAX_ARM_COUNT: usize = 1_024;

    /// Parse a JSON document; absent fields keep their defaults
    ///
    /// # Example
    /// ```
    /// use galaxy::GalaxyConfig;
    ///
    /// let config = GalaxyConfig::from_json(r#"{ "starCount": 500, "armCount": 4 }"#).unwrap();
    /// assert_eq!(config.star_count, 500);
    /// assert_eq!(config.arm_count, 4);
    /// assert_eq!(config.spiral_tightness, 5.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Copy of the config that the sampler can always consume.
    ///
    /// - `star_count` above [`MAX_STAR_COUNT`](Self::MAX_STAR_COUNT) is capped
    /// - `arm_count` of zero becomes one; above
    ///   [`MAX_ARM_COUNT`](Self::MAX_ARM_COUNT) it is capped
    /// - negative spreads take their absolute value, non-finite ones become zero
    /// - a non-finite `spiral_tightness` or arm mean becomes zero
    /// - invalid class weights become zero
    ///
    /// Each correction is reported with a `warn` event.
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();

        if config.arm_count == 0 {
            warn!("arm count of 0 replaced with 1");
            config.arm_count = 1;
        }
        if config.arm_count > Self::MAX_ARM_COUNT {
            warn!(
                arm_count = config.arm_count,
                max = Self::MAX_ARM_COUNT,
                "arm count capped"
            );
            config.arm_count = Self::MAX_ARM_COUNT;
        }
        if config.star_count > Self::MAX_STAR_COUNT {
            warn!(
                star_count = config.star_count,
                max = Self::MAX_STAR_COUNT,
                "star count capped"
            );
            config.star_count = Self::MAX_STAR_COUNT;
        }

        config.core_radius_x = spread("coreRadiusX", config.core_radius_x);
        config.core_radius_y = spread("coreRadiusY", config.core_radius_y);
        config.arm_spread_x = spread("armSpreadX", config.arm_spread_x);
        config.arm_spread_y = spread("armSpreadY", config.arm_spread_y);
        config.galaxy_thickness = spread("galaxyThickness", config.galaxy_thickness);

        config.spiral_tightness = finite("spiralTightness", config.spiral_tightness);
        config.arm_mean_x = finite("armMeanX", config.arm_mean_x);
        config.arm_mean_y = finite("armMeanY", config.arm_mean_y);

        let star_types = config.star_types.sanitized();
        if star_types != config.star_types {
            warn!(weights = ?config.star_types.weights(), "invalid star type weights zeroed");
            config.star_types = star_types;
        }

        config
    }
}

fn spread(name: &str, value: f64) -> f64 {
    if !value.is_finite() {
        warn!(parameter = name, value, "non-finite spread replaced with 0");
        0.0
    } else if value < 0.0 {
        warn!(parameter = name, value, "negative spread replaced with its magnitude");
        value.abs()
    } else {
        value
    }
}

fn finite(name: &str, value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(parameter = name, value, "non-finite parameter replaced with 0");
        0.0
    }
}
