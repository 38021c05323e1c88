//! Weighted spectral classification.
//!
//! A star's class is drawn by rolling one uniform value and walking the
//! cumulative weights in declaration order (O first, M last). Weights are not
//! required to sum to 1:
//! - a total above 1 means the trailing classes are reached less often (or
//!   never) than their weight suggests
//! - a total below 1 leaves a gap at the top of the roll that resolves to
//!   [`StarTypeDistribution::FALLBACK`]

use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::sampling::sample_unit;
use crate::spectral::SpectralType;

/// Selection weights for each spectral class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarTypeDistribution {
    pub o: f64,
    pub b: f64,
    pub a: f64,
    pub f: f64,
    pub g: f64,
    pub k: f64,
    pub m: f64,
}

impl Default for StarTypeDistribution {
    fn default() -> Self {
        Self::from_weights(SpectralType::ALL.map(SpectralType::default_weight))
    }
}

impl StarTypeDistribution {
    /// Class returned when the roll lands beyond the cumulative total
    pub const FALLBACK: SpectralType = SpectralType::M;

    /// Build from weights ordered as [`SpectralType::ALL`]
    pub fn from_weights(weights: [f64; 7]) -> Self {
        let [o, b, a, f, g, k, m] = weights;
        Self { o, b, a, f, g, k, m }
    }

    /// Weights ordered as [`SpectralType::ALL`]
    pub fn weights(&self) -> [f64; 7] {
        [self.o, self.b, self.a, self.f, self.g, self.k, self.m]
    }

    pub fn weight(&self, spectral_type: SpectralType) -> f64 {
        self.weights()[spectral_type.index()]
    }

    pub fn total_weight(&self) -> f64 {
        self.weights().iter().sum()
    }

    /// Copy with every negative or non-finite weight replaced by zero
    pub fn sanitized(&self) -> Self {
        Self::from_weights(
            self.weights()
                .map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 }),
        )
    }

    /// Draw a spectral class
    ///
    /// # Example
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaChaRng;
    /// use stellar::{SpectralType, StarTypeDistribution};
    ///
    /// let mut rng = ChaChaRng::seed_from_u64(7);
    /// let class = StarTypeDistribution::default().classify(&mut rng);
    /// assert!(SpectralType::ALL.contains(&class));
    /// ```
    pub fn classify(&self, rng: &mut ChaChaRng) -> SpectralType {
        self.classify_roll(sample_unit(rng))
    }

    /// Resolve a roll in [0, 1) against the cumulative weights
    pub fn classify_roll(&self, roll: f64) -> SpectralType {
        let mut cumulative = 0.0;

        for (spectral_type, weight) in SpectralType::ALL.into_iter().zip(self.weights()) {
            cumulative += weight;
            if roll < cumulative {
                return spectral_type;
            }
        }

        Self::FALLBACK
    }

    /// Long-run frequency of each class under [`Self::classify`].
    ///
    /// Accounts for the truncation at 1.0 and for the fallback gap.
    pub fn effective_probabilities(&self) -> [f64; 7] {
        let mut probabilities = [0.0; 7];
        let mut cumulative: f64 = 0.0;

        for (i, weight) in self.weights().into_iter().enumerate() {
            let lower = cumulative.min(1.0);
            cumulative += weight;
            probabilities[i] = (cumulative.min(1.0) - lower).max(0.0);
        }

        probabilities[Self::FALLBACK.index()] += (1.0 - cumulative).max(0.0);
        probabilities
    }
}
