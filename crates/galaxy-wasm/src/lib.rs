//! WASM bindings for galaxy star-field generation.
//!
//! A browser renderer calls these functions whenever a parameter-panel value
//! changes and uploads the returned buffers as point attributes.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! const params = default_galaxy_params();
//! const galaxyId = galaxy_create(42n);
//!
//! function regenerate() {
//!   if (field) field.free(); // release the previous cloud
//!   field = galaxy_regenerate(galaxyId, params);
//!   geometry.setAttribute('position', new THREE.BufferAttribute(field.positions(), 3));
//!   geometry.setAttribute('color', new THREE.BufferAttribute(field.colors(), 3));
//!   geometry.setAttribute('size', new THREE.BufferAttribute(field.sizes(), 1));
//! }
//! ```

use wasm_bindgen::prelude::*;

mod params;
mod star_field;


pub use params::GalaxyParams;
pub use star_field::{
    default_galaxy_params, galaxy_create, galaxy_delete, galaxy_regenerate, generate_galaxy,
    StarField,
};

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
