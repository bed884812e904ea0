//! # Triangle Primitive
//!
//! Emits a single flat-shaded facet.

use crate::facet::{winding_normal, Facet};
use crate::facet_set::FacetSink;
use crate::surface::SurfaceState;
use glam::Vec3;

/// Appends one flat-shaded triangle.
///
/// The normal is `normalize((v3 - v1) × (v2 - v1))` and is assigned to all
/// three vertices together with the state's color. Standalone triangles carry
/// neither texture coordinates nor a material.
///
/// # Arguments
///
/// * `sink` - Target collection
/// * `state` - Surface state supplying the color
/// * `v1`, `v2`, `v3` - Corners in the winding order intended for the front face
///
/// # Example
///
/// ```rust
/// use facet_mesh::{add_triangle, FacetSet, SurfaceState};
/// use glam::Vec3;
///
/// let mut facets = FacetSet::new();
/// add_triangle(&mut facets, &SurfaceState::default(), Vec3::ZERO, Vec3::Y, Vec3::X);
/// assert_eq!(facets.as_slice()[0].normals[0], Vec3::Z);
/// ```
pub fn add_triangle<S>(sink: &mut S, state: &SurfaceState, v1: Vec3, v2: Vec3, v3: Vec3)
where
    S: FacetSink + ?Sized,
{
    let normal = winding_normal(v1, v2, v3);
    sink.push_facet(Facet::flat([v1, v2, v3], normal, state.color));
}
