use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use stellar::SpectralType;

/// Index-aligned star attributes ready for GPU point rendering.
///
/// `positions[i]`, `colors[i]`, `sizes[i]` and `classes[i]` all describe
/// star `i`. Buffers are `f32` to match vertex attribute layouts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxyPointCloud {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    sizes: Vec<f32>,
    classes: Vec<SpectralType>,
}

impl GalaxyPointCloud {
    /// Point size assigned to every star
    pub const STAR_SIZE: f32 = 1.0;

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
            sizes: Vec::with_capacity(capacity),
            classes: Vec::with_capacity(capacity),
        }
    }

    /// Append one star; its color is looked up from the spectral class
    pub fn push(&mut self, position: Point3<f64>, class: SpectralType) {
        self.positions
            .push([position.x as f32, position.y as f32, position.z as f32]);
        self.colors.push(class.color().to_normalized());
        self.sizes.push(Self::STAR_SIZE);
        self.classes.push(class);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn classes(&self) -> &[SpectralType] {
        &self.classes
    }

    /// Positions as x0, y0, z0, x1, ... for a 3-component vertex buffer
    pub fn flat_positions(&self) -> &[f32] {
        self.positions.as_flattened()
    }

    /// Colors as r0, g0, b0, r1, ... for a 3-component vertex buffer
    pub fn flat_colors(&self) -> &[f32] {
        self.colors.as_flattened()
    }

    /// Number of stars of each class, indexed by [`SpectralType::index`]
    pub fn class_counts(&self) -> [usize; 7] {
        let mut counts = [0; 7];
        for class in &self.classes {
            counts[class.index()] += 1;
        }
        counts
    }

    /// Largest distance from the rotation axis, or 0 for an empty cloud
    pub fn max_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|[x, y, _]| x.hypot(*y))
            .fold(0.0, f32::max)
    }
}
