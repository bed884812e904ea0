//! # Box Assembly
//!
//! Builds an open box from five quads around eight corners.

use crate::facet_set::FacetSink;
use crate::primitives::quad::add_square;
use crate::surface::{StateCursor, SurfaceState};
use config::constants::BOX_FACE_COUNT;
use glam::Vec3;
use log::debug;

/// Computes the eight corners of a box centered at `origin`.
///
/// `size` holds full extents; half extents are derived here. Corner order
/// is `a..h`:
///
/// ```text
/// a (-x,-y,+z)  b (-x,+y,+z)  c (+x,+y,+z)  d (+x,-y,+z)
/// e (+x,+y,-z)  f (+x,-y,-z)  g (-x,+y,-z)  h (-x,-y,-z)
/// ```
pub fn box_corners(origin: Vec3, size: Vec3) -> [Vec3; 8] {
    let half = size / 2.0;
    let Vec3 { x, y, z } = origin;

    [
        Vec3::new(x - half.x, y - half.y, z + half.z),
        Vec3::new(x - half.x, y + half.y, z + half.z),
        Vec3::new(x + half.x, y + half.y, z + half.z),
        Vec3::new(x + half.x, y - half.y, z + half.z),
        Vec3::new(x + half.x, y + half.y, z - half.z),
        Vec3::new(x + half.x, y - half.y, z - half.z),
        Vec3::new(x - half.x, y + half.y, z - half.z),
        Vec3::new(x - half.x, y - half.y, z - half.z),
    ]
}

/// Quad corner lists in emission order: front, right, back, left, top.
///
/// There is no bottom quad; the wiring leaves the `-y` side open.
pub fn box_faces(origin: Vec3, size: Vec3) -> [[Vec3; 4]; BOX_FACE_COUNT] {
    let [a, b, c, d, e, f, g, h] = box_corners(origin, size);

    [
        [a, b, c, d], // front (+z)
        [d, c, e, f], // right (+x)
        [f, e, g, h], // back (-z)
        [h, g, b, a], // left (-x)
        [c, b, g, e], // top (+y)
    ]
}

/// Appends a box with one surface state on every quad.
///
/// Emits exactly ten facets.
///
/// # Arguments
///
/// * `sink` - Target collection
/// * `state` - Surface state for all faces
/// * `origin` - Box center
/// * `size` - Full extents along each axis
///
/// # Example
///
/// ```rust
/// use facet_mesh::{make_box, FacetSet, SurfaceState};
/// use glam::Vec3;
///
/// let mut facets = FacetSet::new();
/// make_box(&mut facets, &SurfaceState::default(), Vec3::ZERO, Vec3::splat(2.0));
/// assert_eq!(facets.len(), 10);
/// ```
pub fn make_box<S>(sink: &mut S, state: &SurfaceState, origin: Vec3, size: Vec3)
where
    S: FacetSink + ?Sized,
{
    for [a, b, c, d] in box_faces(origin, size) {
        add_square(sink, state, a, b, c, d);
    }
    debug!("box at {origin} size {size}: {BOX_FACE_COUNT} quads, single state");
}

/// Appends a box taking one surface state per quad, in face order.
///
/// States are read left to right; once `states` runs out the remaining quads
/// use the unset default. Extra states are ignored and the slice is never
/// modified.
///
/// # Example
///
/// ```rust
/// use facet_mesh::{make_box_with_states, FacetSet, SurfaceState};
/// use glam::{Vec3, Vec4};
///
/// let states = [SurfaceState::colored(Vec4::X), SurfaceState::colored(Vec4::Y)];
/// let mut facets = FacetSet::new();
/// make_box_with_states(&mut facets, &states, Vec3::ZERO, Vec3::ONE);
///
/// assert_eq!(facets.as_slice()[2].colors[0], Vec4::Y);
/// assert_eq!(facets.as_slice()[4].colors[0], Vec4::ZERO);
/// ```
pub fn make_box_with_states<S>(sink: &mut S, states: &[SurfaceState], origin: Vec3, size: Vec3)
where
    S: FacetSink + ?Sized,
{
    let mut cursor = StateCursor::new(states);
    for [a, b, c, d] in box_faces(origin, size) {
        add_square(sink, cursor.next_state(), a, b, c, d);
    }
    debug!(
        "box at {origin} size {size}: {BOX_FACE_COUNT} quads, {} of {} states used",
        cursor.consumed(),
        states.len()
    );
}
