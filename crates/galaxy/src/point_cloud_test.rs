use approx::assert_relative_eq;
use nalgebra::Point3;
use stellar::SpectralType;

use crate::point_cloud::GalaxyPointCloud;

fn sample_cloud() -> GalaxyPointCloud {
    let mut cloud = GalaxyPointCloud::with_capacity(3);
    cloud.push(Point3::new(1.0, 2.0, 3.0), SpectralType::O);
    cloud.push(Point3::new(-3.0, 4.0, 0.5), SpectralType::F);
    cloud.push(Point3::new(0.0, -1.0, -2.0), SpectralType::F);
    cloud
}

#[test]
fn default_cloud_is_empty() {
    let cloud = GalaxyPointCloud::default();

    assert!(cloud.is_empty());
    assert_eq!(cloud.len(), 0);
    assert_eq!(cloud.max_radius(), 0.0);
    assert!(cloud.flat_positions().is_empty());
}

#[test]
fn push_keeps_buffers_aligned() {
    let cloud = sample_cloud();

    assert_eq!(cloud.len(), 3);
    assert_eq!(cloud.positions().len(), 3);
    assert_eq!(cloud.colors().len(), 3);
    assert_eq!(cloud.sizes().len(), 3);
    assert_eq!(cloud.classes().len(), 3);

    assert_eq!(cloud.positions()[1], [-3.0, 4.0, 0.5]);
    assert_eq!(cloud.classes()[1], SpectralType::F);
    assert_eq!(cloud.colors()[1], SpectralType::F.color().to_normalized());
}

#[test]
fn every_star_has_constant_size() {
    let cloud = sample_cloud();
    assert!(cloud
        .sizes()
        .iter()
        .all(|&size| size == GalaxyPointCloud::STAR_SIZE));
    assert_eq!(GalaxyPointCloud::STAR_SIZE, 1.0);
}

#[test]
fn flat_buffers_interleave_components() {
    let cloud = sample_cloud();

    let expected: [f32; 9] = [1.0, 2.0, 3.0, -3.0, 4.0, 0.5, 0.0, -1.0, -2.0];
    assert_eq!(cloud.flat_positions(), &expected[..]);
    assert_eq!(cloud.flat_colors().len(), 9);
    assert_eq!(
        &cloud.flat_colors()[0..3],
        &SpectralType::O.color().to_normalized()[..]
    );
}

#[test]
fn class_counts_tally_classes() {
    let counts = sample_cloud().class_counts();

    assert_eq!(counts[SpectralType::O.index()], 1);
    assert_eq!(counts[SpectralType::F.index()], 2);
    assert_eq!(counts.iter().sum::<usize>(), 3);
}

#[test]
fn max_radius_ignores_height() {
    let cloud = sample_cloud();
    assert_relative_eq!(cloud.max_radius(), 5.0);
}

#[test]
fn serializes_buffers_in_camel_case() {
    let mut cloud = GalaxyPointCloud::default();
    cloud.push(Point3::new(1.0, 0.0, 0.0), SpectralType::A);

    let json = serde_json::to_string(&cloud).unwrap();
    assert_eq!(
        json,
        r#"{"positions":[[1.0,0.0,0.0]],"colors":[[1.0,1.0,1.0]],"sizes":[1.0],"classes":["A"]}"#
    );
}
