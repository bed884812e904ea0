//! Tests for the checked construction layer.

use super::*;
use crate::FacetSet;
use crate::material::same_material;
use crate::Material;
use config::constants::{sphere_facet_count, BOX_FACET_COUNT, DEFAULT_SPHERE_RESOLUTION};
use glam::Vec4;

fn cfg() -> GlobalConfig {
    GlobalConfig::default()
}

#[test]
fn test_valid_triangle_is_appended() {
    let mut facets = FacetSet::new();
    try_add_triangle(&cfg(), &mut facets, &SurfaceState::default(), Vec3::ZERO, Vec3::Y, Vec3::X)
        .unwrap();
    assert_eq!(facets.len(), 1);
}

#[test]
fn test_collinear_triangle_rejected() {
    let mut facets = FacetSet::new();
    let result = try_add_triangle(
        &cfg(),
        &mut facets,
        &SurfaceState::default(),
        Vec3::ZERO,
        Vec3::X,
        Vec3::X * 3.0,
    );
    assert!(matches!(result, Err(MeshError::DegenerateGeometry { .. })));
    assert!(facets.is_empty());
}

#[test]
fn test_nan_corner_rejected() {
    let result = check_triangle(&cfg(), Vec3::NAN, Vec3::X, Vec3::Y);
    assert!(matches!(result, Err(MeshError::DegenerateGeometry { .. })));
}

#[test]
fn test_square_with_collapsed_half_rejected() {
    let mut facets = FacetSet::new();
    // d == a collapses the second triangle
    let result = try_add_square(
        &cfg(),
        &mut facets,
        &SurfaceState::default(),
        Vec3::ZERO,
        Vec3::Y,
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::ZERO,
    );
    assert!(result.is_err());
    assert!(facets.is_empty());
}

#[test]
fn test_valid_square_is_appended() {
    let mut facets = FacetSet::new();
    try_add_square(
        &cfg(),
        &mut facets,
        &SurfaceState::default(),
        Vec3::ZERO,
        Vec3::Y,
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::X,
    )
    .unwrap();
    assert_eq!(facets.len(), 2);
}

#[test]
fn test_box_size_validation() {
    let mut facets = FacetSet::new();
    let state = SurfaceState::default();
    assert_eq!(
        try_make_box(&cfg(), &mut facets, &state, Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0)),
        Err(MeshError::InvalidSize {
            size: Vec3::new(1.0, 0.0, 1.0)
        })
    );
    assert!(try_make_box(&cfg(), &mut facets, &state, Vec3::ZERO, Vec3::new(1.0, f32::INFINITY, 1.0)).is_err());
    assert!(try_make_box(&cfg(), &mut facets, &state, Vec3::NAN, Vec3::ONE).is_err());
    assert!(facets.is_empty());

    try_make_box(&cfg(), &mut facets, &state, Vec3::ZERO, Vec3::ONE).unwrap();
    assert_eq!(facets.len(), BOX_FACET_COUNT);
}

#[test]
fn test_box_thinner_than_area_epsilon_rejected() {
    let cfg = GlobalConfig::new(1.0e-4, 1.0e-2, 8).unwrap();
    let mut facets = FacetSet::new();
    let size = Vec3::new(0.05, 0.1, 10.0);
    assert_eq!(
        try_make_box(&cfg, &mut facets, &SurfaceState::default(), Vec3::ZERO, size),
        Err(MeshError::InvalidSize { size })
    );
    assert!(facets.is_empty());
}

#[test]
fn test_box_with_states_validates_then_consumes_in_order() {
    let states = [
        SurfaceState::new(Vec4::X, Some(Material::named("front").into_ref())),
        SurfaceState::new(Vec4::Y, Some(Material::named("right").into_ref())),
    ];
    let mut facets = FacetSet::new();
    assert!(try_make_box_with_states(&cfg(), &mut facets, &states, Vec3::ZERO, Vec3::new(-1.0, 1.0, 1.0)).is_err());
    assert!(facets.is_empty());

    try_make_box_with_states(&cfg(), &mut facets, &states, Vec3::ZERO, Vec3::splat(2.0)).unwrap();
    assert_eq!(facets.len(), BOX_FACET_COUNT);
    let quads: Vec<_> = facets.as_slice().chunks(2).collect();
    assert!(same_material(quads[0][0].material.as_ref(), states[0].material.as_ref()));
    assert!(same_material(quads[1][1].material.as_ref(), states[1].material.as_ref()));
    assert!(quads[2..].iter().flat_map(|q| q.iter()).all(|f| f.material.is_none()));
}

#[test]
fn test_sphere_validation() {
    let mut facets = FacetSet::new();
    let state = SurfaceState::default();
    assert_eq!(
        try_make_sphere(&cfg(), &mut facets, &state, Vec3::ZERO, 0.0, 8),
        Err(MeshError::InvalidRadius { radius: 0.0 })
    );
    assert_eq!(
        try_make_sphere(&cfg(), &mut facets, &state, Vec3::ZERO, 1.0, 1),
        Err(MeshError::InvalidResolution {
            resolution: 1,
            min: MIN_SPHERE_RESOLUTION,
            max: MAX_SPHERE_RESOLUTION
        })
    );
    assert!(try_make_sphere(&cfg(), &mut facets, &state, Vec3::ZERO, 1.0, MAX_SPHERE_RESOLUTION + 1).is_err());
    assert!(try_make_sphere(&cfg(), &mut facets, &state, Vec3::ZERO, f32::NAN, 8).is_err());
    assert!(facets.is_empty());

    try_make_sphere(&cfg(), &mut facets, &state, Vec3::ZERO, 1.0, 8).unwrap();
    assert_eq!(facets.len(), sphere_facet_count(8));
}

#[test]
fn test_default_sphere_uses_config_resolution() {
    let cfg = GlobalConfig::new(1.0e-4, 1.0e-8, 3).unwrap();
    let mut facets = FacetSet::new();
    try_make_default_sphere(&cfg, &mut facets, &SurfaceState::default(), Vec3::ZERO, 1.0).unwrap();
    assert_eq!(facets.len(), sphere_facet_count(3));
}

#[test]
fn test_every_valid_config_builds_its_default_sphere() {
    for resolution in [MIN_SPHERE_RESOLUTION, 3, DEFAULT_SPHERE_RESOLUTION] {
        let cfg = GlobalConfig::new(1.0e-4, 1.0e-8, resolution).unwrap();
        let mut facets = FacetSet::new();
        try_make_default_sphere(&cfg, &mut facets, &SurfaceState::default(), Vec3::ZERO, 1.0).unwrap();
        assert_eq!(facets.len(), sphere_facet_count(resolution));
    }
    assert!(GlobalConfig::new(1.0e-4, 1.0e-8, 1).is_err());
}

#[test]
fn test_wide_pole_tolerance_skips_more_cells() {
    // Tolerance wider than one step also swallows the band above the pole.
    let step = std::f32::consts::PI / 4.0;
    let cfg = GlobalConfig::new(step * 1.5, 1.0e-8, 4).unwrap();
    let mut facets = FacetSet::new();
    try_make_sphere(&cfg, &mut facets, &SurfaceState::default(), Vec3::ZERO, 1.0, 4).unwrap();
    assert_eq!(facets.len(), 2 * 8 * 2);
}

#[test]
fn test_winding_check() {
    let n = check_winding(Vec3::ZERO, Vec3::Y, Vec3::X, Vec3::Z).unwrap();
    assert_eq!(n, Vec3::Z);

    let err = check_winding(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z).unwrap_err();
    assert_eq!(err, MeshError::winding(Vec3::NEG_Z, Vec3::Z));
    assert!(err.to_string().starts_with("Winding mismatch"));

    assert!(matches!(
        check_winding(Vec3::ZERO, Vec3::ZERO, Vec3::X, Vec3::Z),
        Err(MeshError::DegenerateGeometry { .. })
    ));
}

#[test]
fn test_config_error_converts() {
    let err: MeshError = GlobalConfig::new(0.0, 0.0, 4).unwrap_err().into();
    assert!(matches!(err, MeshError::Config(_)));
}
