use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

/// Sample from a Gaussian (normal) distribution using Box-Muller transform
///
/// The first uniform is taken as `1 - u` so it lies in (0, 1] and the
/// logarithm is always finite.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
///
/// # Returns
/// A sample from the normal distribution N(mean, std_dev²)
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::sampling::sample_gaussian;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let x = sample_gaussian(&mut rng, 0.0, 33.0);
/// assert!(x.is_finite());
/// ```
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    let u = 1.0 - sample_unit(rng);
    let v = sample_unit(rng);
    let z = (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos();
    z * std_dev + mean
}

/// Uniform draw in [0, 1)
pub fn sample_unit(rng: &mut ChaChaRng) -> f64 {
    rng.random::<f64>()
}
