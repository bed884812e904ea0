//! # Quad Primitive
//!
//! Splits a four-corner panel into two textured facets sharing one normal.

use crate::facet::{winding_normal, Facet};
use crate::facet_set::FacetSink;
use crate::surface::SurfaceState;
use glam::{Vec2, Vec3};

/// Texture coordinates of the first triangle `(a, b, c)`.
pub const FIRST_TRIANGLE_UVS: [Vec2; 3] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// Texture coordinates of the second triangle `(a, c, d)`.
pub const SECOND_TRIANGLE_UVS: [Vec2; 3] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, 0.0),
];

/// Appends a quad as the two facets `(a, b, c)` and `(a, c, d)`.
///
/// Both facets share the normal `normalize((c - a) × (b - a))`, so the panel
/// shades flat even when the corners are not coplanar. Each facet receives a
/// unit-square UV layout, the state's color and the state's material.
///
/// # Arguments
///
/// * `sink` - Target collection
/// * `state` - Surface state supplying color and material
/// * `a`, `b`, `c`, `d` - Corners in boundary order
///
/// # Example
///
/// ```rust
/// use facet_mesh::{add_square, FacetSet, SurfaceState};
/// use glam::Vec3;
///
/// let mut facets = FacetSet::new();
/// add_square(&mut facets, &SurfaceState::default(), Vec3::ZERO, Vec3::Y, Vec3::new(1.0, 1.0, 0.0), Vec3::X);
/// assert_eq!(facets.len(), 2);
/// ```
pub fn add_square<S>(sink: &mut S, state: &SurfaceState, a: Vec3, b: Vec3, c: Vec3, d: Vec3)
where
    S: FacetSink + ?Sized,
{
    let normal = winding_normal(a, b, c);

    sink.push_facet(
        Facet::flat([a, b, c], normal, state.color)
            .with_tex_coords(FIRST_TRIANGLE_UVS)
            .with_material(state.material.clone()),
    );
    sink.push_facet(
        Facet::flat([a, c, d], normal, state.color)
            .with_tex_coords(SECOND_TRIANGLE_UVS)
            .with_material(state.material.clone()),
    );
}
