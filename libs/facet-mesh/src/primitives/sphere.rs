//! # Sphere Primitive
//!
//! Generates a faceted sphere from a latitude/longitude grid.

use crate::facet_set::FacetSink;
use crate::primitives::triangle::add_triangle;
use crate::surface::SurfaceState;
use config::constants::POLE_TOLERANCE;
use glam::Vec3;
use log::{debug, trace};
use std::f32::consts::PI;

/// Appends a UV-parameterized sphere.
///
/// # Arguments
///
/// * `sink` - Target collection
/// * `state` - Surface state supplying the color
/// * `origin` - Sphere center
/// * `radius` - Sphere radius
/// * `resolution` - Latitude steps; longitude uses `2 * resolution` steps
///
/// # Algorithm
///
/// With `step = π / resolution`, every cell `(φ, θ)` with
/// `φ = i * step` for `i in 0..2 * resolution` and
/// `θ = (j + 1) * step` for `j in 0..resolution` yields corners
/// `a = (φ, θ)`, `b = (φ + step, θ)`, `c = (φ, θ + step)` and
/// `d = (φ + step, θ + step)`, emitted as the triangles `(a, b, c)` and
/// `(b, d, c)`. Each triangle gets its own flat normal. Neighbor angles are
/// derived from the grid index rather than `φ + step`, so cells sharing an
/// edge produce bit-identical corners.
///
/// Cells whose `θ` lies within [`POLE_TOLERANCE`] of π are skipped, so the
/// last latitude band never appears and at most
/// `4 * resolution * (resolution - 1)` facets are emitted.
///
/// # Example
///
/// ```rust
/// use facet_mesh::{make_sphere, FacetSet, SurfaceState};
/// use glam::Vec3;
///
/// let mut facets = FacetSet::new();
/// make_sphere(&mut facets, &SurfaceState::default(), Vec3::ZERO, 1.0, 4);
/// assert_eq!(facets.len(), 48);
/// ```
pub fn make_sphere<S>(sink: &mut S, state: &SurfaceState, origin: Vec3, radius: f32, resolution: u32)
where
    S: FacetSink + ?Sized,
{
    emit_sphere(sink, state, origin, radius, resolution, POLE_TOLERANCE);
}

/// Sphere generation with an explicit pole tolerance.
pub(crate) fn emit_sphere<S>(
    sink: &mut S,
    state: &SurfaceState,
    origin: Vec3,
    radius: f32,
    resolution: u32,
    pole_tolerance: f32,
) where
    S: FacetSink + ?Sized,
{
    let step = PI / resolution as f32;
    let (columns, rows) = grid_steps(resolution);
    let mut emitted = 0usize;
    let mut skipped = 0usize;

    for i in 0..columns {
        let phi = i as f32 * step;
        let phi_next = (i + 1) as f32 * step;

        for j in 0..rows {
            let theta = (j + 1) as f32 * step;
            let theta_next = (j + 2) as f32 * step;
            trace!("sphere cell phi={phi} theta={theta}");

            if (theta - PI).abs() < pole_tolerance {
                skipped += 1;
                continue;
            }

            let a = spherical_point(origin, radius, phi, theta);
            let b = spherical_point(origin, radius, phi_next, theta);
            let c = spherical_point(origin, radius, phi, theta_next);
            let d = spherical_point(origin, radius, phi_next, theta_next);

            add_triangle(sink, state, a, b, c);
            add_triangle(sink, state, b, d, c);
            emitted += 2;
        }
    }

    debug!(
        "sphere at {origin} r={radius} res={resolution}: {emitted} facets, {skipped} pole cells skipped"
    );
}

/// Longitude and latitude step counts for a resolution.
///
/// Widened to `u64` so `2 * resolution` cannot overflow.
#[inline]
pub fn grid_steps(resolution: u32) -> (u64, u64) {
    let rows = u64::from(resolution);
    (2 * rows, rows)
}

/// Converts spherical coordinates to a point.
///
/// `x = x0 + r sinθ cosφ`, `y = y0 + r sinθ sinφ`, `z = z0 + r cosθ`.
#[inline]
pub fn spherical_point(origin: Vec3, radius: f32, phi: f32, theta: f32) -> Vec3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    origin + radius * Vec3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}
