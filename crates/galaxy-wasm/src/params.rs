//! Parameter-panel values as they arrive from JavaScript.

use galaxy::GalaxyConfig;
use serde::{Deserialize, Serialize};
use stellar::StarTypeDistribution;

/// Galaxy parameters from a GUI panel.
///
/// Slider values are plain JS numbers, so counts may arrive fractional,
/// negative or NaN; they are rounded and clamped when converted into a
/// [`GalaxyConfig`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalaxyParams {
    pub star_count: f64,
    pub arm_count: f64,
    pub spiral_tightness: f64,
    pub core_radius_x: f64,
    pub core_radius_y: f64,
    pub arm_spread_x: f64,
    pub arm_spread_y: f64,
    pub arm_mean_x: f64,
    pub arm_mean_y: f64,
    pub galaxy_thickness: f64,
    pub density: f64,
    pub noise_factor: f64,
    pub arm_width: f64,
    pub arm_separation: f64,
    pub z_spread: f64,
    /// Spectral class weights; the default table when absent
    pub star_types: Option<StarTypeDistribution>,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        GalaxyConfig::default().into()
    }
}

impl From<GalaxyConfig> for GalaxyParams {
    fn from(config: GalaxyConfig) -> Self {
        Self {
            star_count: config.star_count as f64,
            arm_count: config.arm_count as f64,
            spiral_tightness: config.spiral_tightness,
            core_radius_x: config.core_radius_x,
            core_radius_y: config.core_radius_y,
            arm_spread_x: config.arm_spread_x,
            arm_spread_y: config.arm_spread_y,
            arm_mean_x: config.arm_mean_x,
            arm_mean_y: config.arm_mean_y,
            galaxy_thickness: config.galaxy_thickness,
            density: config.density,
            noise_factor: config.noise_factor,
            arm_width: config.arm_width,
            arm_separation: config.arm_separation,
            z_spread: config.z_spread,
            star_types: Some(config.star_types),
        }
    }
}

impl From<GalaxyParams> for GalaxyConfig {
    fn from(params: GalaxyParams) -> Self {
        Self {
            star_count: to_count(params.star_count),
            arm_count: to_count(params.arm_count).clamp(1, GalaxyConfig::MAX_ARM_COUNT),
            spiral_tightness: params.spiral_tightness,
            core_radius_x: params.core_radius_x,
            core_radius_y: params.core_radius_y,
            arm_spread_x: params.arm_spread_x,
            arm_spread_y: params.arm_spread_y,
            arm_mean_x: params.arm_mean_x,
            arm_mean_y: params.arm_mean_y,
            galaxy_thickness: params.galaxy_thickness,
            density: params.density,
            noise_factor: params.noise_factor,
            arm_width: params.arm_width,
            arm_separation: params.arm_separation,
            z_spread: params.z_spread,
            star_types: params.star_types.unwrap_or_default(),
        }
    }
}

/// Round a slider value to a count; negative and non-finite values become 0,
/// anything larger than [`GalaxyConfig::MAX_STAR_COUNT`] is capped there
pub(crate) fn to_count(value: f64) -> usize {
    if !value.is_finite() || value <= 0.0 {
        0
    } else {
        value.round().min(GalaxyConfig::MAX_STAR_COUNT as f64) as usize
    }
}
