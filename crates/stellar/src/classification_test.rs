use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::classification::StarTypeDistribution;
use crate::spectral::SpectralType;

// ============================================================================
// Roll resolution
// ============================================================================

#[test]
fn classify_roll_walks_cumulative_weights() {
    let table = StarTypeDistribution::default();

    // Cumulative: O 0.01, B 0.03, A 0.23, F 0.58, G 0.83, K 1.03
    assert_eq!(table.classify_roll(0.0), SpectralType::O);
    assert_eq!(table.classify_roll(0.009), SpectralType::O);
    assert_eq!(table.classify_roll(0.01), SpectralType::B);
    assert_eq!(table.classify_roll(0.2), SpectralType::A);
    assert_eq!(table.classify_roll(0.5), SpectralType::F);
    assert_eq!(table.classify_roll(0.7), SpectralType::G);
    assert_eq!(table.classify_roll(0.9), SpectralType::K);
    assert_eq!(table.classify_roll(0.999_999), SpectralType::K);
}

#[test]
fn classify_roll_uses_fallback_past_total() {
    let table = StarTypeDistribution::from_weights([0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.0]);

    assert_eq!(table.classify_roll(0.59), SpectralType::K);
    assert_eq!(table.classify_roll(0.61), StarTypeDistribution::FALLBACK);
    assert_eq!(table.classify_roll(0.99), SpectralType::M);
}

#[test]
fn classify_roll_all_zero_weights_falls_back() {
    let table = StarTypeDistribution::from_weights([0.0; 7]);
    assert_eq!(table.classify_roll(0.0), StarTypeDistribution::FALLBACK);
}

// ============================================================================
// Table accessors
// ============================================================================

#[test]
fn default_table_matches_class_weights() {
    let table = StarTypeDistribution::default();

    for spectral_type in SpectralType::ALL {
        assert_eq!(table.weight(spectral_type), spectral_type.default_weight());
    }
    assert_relative_eq!(table.total_weight(), 1.18, epsilon = 1e-12);
}

#[test]
fn sanitized_zeroes_invalid_weights() {
    let table =
        StarTypeDistribution::from_weights([0.1, -0.5, f64::NAN, 0.3, f64::INFINITY, 0.2, 0.1]);
    let clean = table.sanitized();

    assert_eq!(clean.weights(), [0.1, 0.0, 0.0, 0.3, 0.0, 0.2, 0.1]);
}

#[test]
fn effective_probabilities_truncate_at_one() {
    let probabilities = StarTypeDistribution::default().effective_probabilities();

    assert_relative_eq!(probabilities[SpectralType::F.index()], 0.35, epsilon = 1e-12);
    assert_relative_eq!(probabilities[SpectralType::K.index()], 0.17, epsilon = 1e-12);
    assert_relative_eq!(probabilities[SpectralType::M.index()], 0.0, epsilon = 1e-12);
    assert_relative_eq!(probabilities.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
}

#[test]
fn effective_probabilities_assign_gap_to_fallback() {
    let table = StarTypeDistribution::from_weights([0.2, 0.2, 0.2, 0.0, 0.0, 0.0, 0.1]);
    let probabilities = table.effective_probabilities();

    assert_relative_eq!(probabilities[SpectralType::M.index()], 0.4, epsilon = 1e-12);
    assert_relative_eq!(probabilities.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
}

// ============================================================================
// Sampling
// ============================================================================

#[test]
fn classify_frequencies_match_table() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let table = StarTypeDistribution::default();
    let draws = 1_000_000;

    let mut counts = [0usize; 7];
    for _ in 0..draws {
        counts[table.classify(&mut rng).index()] += 1;
    }

    let expected = table.effective_probabilities();
    for spectral_type in SpectralType::ALL {
        let observed = counts[spectral_type.index()] as f64 / draws as f64;
        assert!(
            (observed - expected[spectral_type.index()]).abs() < 0.01,
            "{} observed {} expected {}",
            spectral_type,
            observed,
            expected[spectral_type.index()]
        );
    }

    let f_share = counts[SpectralType::F.index()] as f64 / draws as f64;
    assert!((f_share - 0.35).abs() < 0.01, "F share {}", f_share);
    assert_eq!(counts[SpectralType::M.index()], 0);
}

#[test]
fn classify_is_reproducible_with_seed() {
    let table = StarTypeDistribution::default();
    let mut rng1 = ChaChaRng::seed_from_u64(5);
    let mut rng2 = ChaChaRng::seed_from_u64(5);

    for _ in 0..100 {
        assert_eq!(table.classify(&mut rng1), table.classify(&mut rng2));
    }
}

#[test]
fn distribution_deserializes_with_camel_case_keys() {
    let json = r#"{"o":0.1,"b":0.1,"a":0.1,"f":0.1,"g":0.1,"k":0.1,"m":0.4}"#;
    let table: StarTypeDistribution = serde_json::from_str(json).unwrap();

    assert_eq!(table.weight(SpectralType::M), 0.4);
}
