//! Spectral classes, their display colors, and the random primitives used to
//! populate a star field.

pub mod classification;
pub mod sampling;
pub mod spectral;
pub mod stellar_color;

#[cfg(test)]
mod classification_test;

// Re-export spectral types
pub use spectral::SpectralType;

// Re-export classification
pub use classification::StarTypeDistribution;

// Re-export color
pub use stellar_color::StellarColor;

// Re-export sampling functions
pub use sampling::{sample_gaussian, sample_unit};
