//! # Checked Construction
//!
//! Validating wrappers around the permissive primitives.
//!
//! Each `try_*` function rejects inputs that would produce NaN normals or
//! empty output, then delegates to the matching primitive. Nothing is
//! appended when validation fails.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::GlobalConfig;
//! use facet_mesh::checked::try_make_sphere;
//! use facet_mesh::{FacetSet, MeshError, SurfaceState};
//! use glam::Vec3;
//!
//! let cfg = GlobalConfig::default();
//! let mut facets = FacetSet::new();
//! let err = try_make_sphere(&cfg, &mut facets, &SurfaceState::default(), Vec3::ZERO, -1.0, 8);
//! assert!(matches!(err, Err(MeshError::InvalidRadius { .. })));
//! assert!(facets.is_empty());
//! ```

use crate::error::MeshError;
use crate::facet::winding_normal;
use crate::facet_set::FacetSink;
use crate::primitives::{
    add_square, add_triangle, make_box, make_box_with_states, sphere::emit_sphere,
};
use crate::surface::SurfaceState;
use config::constants::{GlobalConfig, MAX_SPHERE_RESOLUTION, MIN_SPHERE_RESOLUTION};
use glam::Vec3;

/// Validates a triangle and appends it.
pub fn try_add_triangle<S>(
    cfg: &GlobalConfig,
    sink: &mut S,
    state: &SurfaceState,
    v1: Vec3,
    v2: Vec3,
    v3: Vec3,
) -> Result<(), MeshError>
where
    S: FacetSink + ?Sized,
{
    check_triangle(cfg, v1, v2, v3)?;
    add_triangle(sink, state, v1, v2, v3);
    Ok(())
}

/// Validates both halves of a quad and appends it.
///
/// Coplanarity is not required; only the two triangles `(a, b, c)` and
/// `(a, c, d)` must be non-degenerate.
pub fn try_add_square<S>(
    cfg: &GlobalConfig,
    sink: &mut S,
    state: &SurfaceState,
    a: Vec3,
    b: Vec3,
    c: Vec3,
    d: Vec3,
) -> Result<(), MeshError>
where
    S: FacetSink + ?Sized,
{
    check_triangle(cfg, a, b, c)?;
    check_triangle(cfg, a, c, d)?;
    add_square(sink, state, a, b, c, d);
    Ok(())
}

/// Validates box extents and appends the box.
pub fn try_make_box<S>(
    cfg: &GlobalConfig,
    sink: &mut S,
    state: &SurfaceState,
    origin: Vec3,
    size: Vec3,
) -> Result<(), MeshError>
where
    S: FacetSink + ?Sized,
{
    check_box(cfg, origin, size)?;
    make_box(sink, state, origin, size);
    Ok(())
}

/// Validates box extents and appends the box with one state per quad.
///
/// State consumption matches [`make_box_with_states`]: missing states fall
/// back to the unset default and extras are ignored.
pub fn try_make_box_with_states<S>(
    cfg: &GlobalConfig,
    sink: &mut S,
    states: &[SurfaceState],
    origin: Vec3,
    size: Vec3,
) -> Result<(), MeshError>
where
    S: FacetSink + ?Sized,
{
    check_box(cfg, origin, size)?;
    make_box_with_states(sink, states, origin, size);
    Ok(())
}

/// Rejects non-finite origins and extents that are not strictly positive.
///
/// Every face is a product of two extents, so the smallest face must also
/// clear the configured area epsilon.
pub fn check_box(cfg: &GlobalConfig, origin: Vec3, size: Vec3) -> Result<(), MeshError> {
    if !origin.is_finite() {
        return Err(MeshError::degenerate(format!("Box origin is not finite: {origin}")));
    }
    if !size.is_finite() || size.min_element() <= 0.0 {
        return Err(MeshError::InvalidSize { size });
    }
    let sorted = {
        let mut extents = size.to_array();
        extents.sort_by(f32::total_cmp);
        extents
    };
    if sorted[0] * sorted[1] <= cfg.area_epsilon {
        return Err(MeshError::InvalidSize { size });
    }
    Ok(())
}

/// Validates sphere parameters and appends the sphere using the configured
/// pole tolerance.
///
/// Resolutions outside `MIN_SPHERE_RESOLUTION..=MAX_SPHERE_RESOLUTION` are
/// rejected, the same range [`GlobalConfig::new`] enforces for the default.
pub fn try_make_sphere<S>(
    cfg: &GlobalConfig,
    sink: &mut S,
    state: &SurfaceState,
    origin: Vec3,
    radius: f32,
    resolution: u32,
) -> Result<(), MeshError>
where
    S: FacetSink + ?Sized,
{
    if !origin.is_finite() {
        return Err(MeshError::degenerate(format!("Sphere origin is not finite: {origin}")));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::InvalidRadius { radius });
    }
    if !(MIN_SPHERE_RESOLUTION..=MAX_SPHERE_RESOLUTION).contains(&resolution) {
        return Err(MeshError::InvalidResolution {
            resolution,
            min: MIN_SPHERE_RESOLUTION,
            max: MAX_SPHERE_RESOLUTION,
        });
    }
    emit_sphere(sink, state, origin, radius, resolution, cfg.pole_tolerance);
    Ok(())
}

/// Appends a sphere at the configured default resolution.
pub fn try_make_default_sphere<S>(
    cfg: &GlobalConfig,
    sink: &mut S,
    state: &SurfaceState,
    origin: Vec3,
    radius: f32,
) -> Result<(), MeshError>
where
    S: FacetSink + ?Sized,
{
    try_make_sphere(cfg, sink, state, origin, radius, cfg.default_resolution)
}

/// Rejects triangles with non-finite corners or (doubled) area below the
/// configured epsilon.
pub fn check_triangle(cfg: &GlobalConfig, v1: Vec3, v2: Vec3, v3: Vec3) -> Result<(), MeshError> {
    if !(v1.is_finite() && v2.is_finite() && v3.is_finite()) {
        return Err(MeshError::degenerate(format!(
            "Triangle has non-finite corner: {v1} {v2} {v3}"
        )));
    }
    let doubled_area = (v3 - v1).cross(v2 - v1).length();
    if doubled_area <= cfg.area_epsilon {
        return Err(MeshError::degenerate(format!(
            "Triangle area below {}: {v1} {v2} {v3}",
            cfg.area_epsilon
        )));
    }
    Ok(())
}

/// Verifies that `v1, v2, v3` wind toward `expected`.
///
/// Returns the computed normal on success. Fails with
/// [`MeshError::WindingMismatch`] when the normal points into the half-space
/// opposite `expected`, which happens whenever two corners are swapped.
///
/// # Example
///
/// ```rust
/// use facet_mesh::checked::check_winding;
/// use glam::Vec3;
///
/// assert_eq!(check_winding(Vec3::ZERO, Vec3::Y, Vec3::X, Vec3::Z).unwrap(), Vec3::Z);
/// assert!(check_winding(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z).is_err());
/// ```
pub fn check_winding(v1: Vec3, v2: Vec3, v3: Vec3, expected: Vec3) -> Result<Vec3, MeshError> {
    let normal = winding_normal(v1, v2, v3);
    if normal.is_nan() {
        return Err(MeshError::degenerate("Triangle has no defined normal"));
    }
    if normal.dot(expected) <= 0.0 {
        return Err(MeshError::winding(normal, expected));
    }
    Ok(normal)
}

#[cfg(test)]
mod tests;
