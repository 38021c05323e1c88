//! Generated clouds handed to JavaScript.

use std::cell::RefCell;
use std::collections::HashMap;

use galaxy::{generate, GalaxyConfig, GalaxyGenerator, GalaxyPointCloud};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use wasm_bindgen::prelude::*;

use crate::params::GalaxyParams;
use crate::{from_js, to_js};

thread_local! {
    static GENERATORS: RefCell<HashMap<u32, GalaxyGenerator>> = RefCell::new(HashMap::new());
    static NEXT_GALAXY_ID: RefCell<u32> = const { RefCell::new(0) };
}

/// A generated point cloud.
///
/// Buffer getters copy into fresh `Float32Array`s. Call `free()` before
/// replacing a field to release its memory.
#[wasm_bindgen]
pub struct StarField {
    cloud: GalaxyPointCloud,
}

#[wasm_bindgen]
impl StarField {
    /// Number of stars
    pub fn len(&self) -> usize {
        self.cloud.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.cloud.is_empty()
    }

    /// x, y, z per star
    pub fn positions(&self) -> Vec<f32> {
        self.cloud.flat_positions().to_vec()
    }

    /// r, g, b per star, each in [0, 1]
    pub fn colors(&self) -> Vec<f32> {
        self.cloud.flat_colors().to_vec()
    }

    /// Point size per star
    pub fn sizes(&self) -> Vec<f32> {
        self.cloud.sizes().to_vec()
    }

    /// Largest planar radius, for camera framing
    #[wasm_bindgen(js_name = maxRadius)]
    pub fn max_radius(&self) -> f32 {
        self.cloud.max_radius()
    }

    /// Star count per spectral class, ordered O, B, A, F, G, K, M
    #[wasm_bindgen(js_name = classCounts)]
    pub fn class_counts(&self) -> Vec<u32> {
        self.cloud
            .class_counts()
            .iter()
            .map(|&count| u32::try_from(count).unwrap_or(u32::MAX))
            .collect()
    }
}

impl From<GalaxyPointCloud> for StarField {
    fn from(cloud: GalaxyPointCloud) -> Self {
        Self { cloud }
    }
}

fn parse_params(params: JsValue) -> Result<GalaxyConfig, JsError> {
    let params: GalaxyParams = if params.is_undefined() || params.is_null() {
        GalaxyParams::default()
    } else {
        from_js(params)?
    };
    Ok(params.into())
}

/// Default parameter-panel values.
#[wasm_bindgen]
pub fn default_galaxy_params() -> Result<JsValue, JsError> {
    to_js(&GalaxyParams::default())
}

/// Generate a galaxy in one call.
///
/// # Arguments
/// * `params` - Parameter object; missing fields take defaults
/// * `seed` - Random seed for reproducible generation
#[wasm_bindgen]
pub fn generate_galaxy(params: JsValue, seed: u64) -> Result<StarField, JsError> {
    let config = parse_params(params)?;
    let mut rng = ChaChaRng::seed_from_u64(seed);
    Ok(generate(&config, &mut rng).into())
}

/// Create a generator that keeps one random stream across regenerations.
///
/// Returns a galaxy ID for use with other functions.
#[wasm_bindgen]
pub fn galaxy_create(seed: u64) -> u32 {
    let id = NEXT_GALAXY_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    GENERATORS.with(|generators| {
        generators
            .borrow_mut()
            .insert(id, GalaxyGenerator::from_seed(seed));
    });

    id
}

/// Rebuild the galaxy from scratch with new parameters.
#[wasm_bindgen]
pub fn galaxy_regenerate(galaxy_id: u32, params: JsValue) -> Result<StarField, JsError> {
    let config = parse_params(params)?;

    GENERATORS.with(|generators| {
        let mut generators = generators.borrow_mut();
        let generator = generators
            .get_mut(&galaxy_id)
            .ok_or_else(|| JsError::new(&format!("Galaxy {} not found", galaxy_id)))?;

        Ok(regenerate_field(generator, &config))
    })
}

/// Regenerate and move the new cloud out; JS owns the only copy
pub(crate) fn regenerate_field(
    generator: &mut GalaxyGenerator,
    config: &GalaxyConfig,
) -> StarField {
    generator.regenerate(config);
    generator.take().unwrap_or_default().into()
}

/// Delete a generator to free memory.
#[wasm_bindgen]
pub fn galaxy_delete(galaxy_id: u32) {
    GENERATORS.with(|generators| {
        generators.borrow_mut().remove(&galaxy_id);
    });
}
