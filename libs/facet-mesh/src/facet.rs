//! # Facet
//!
//! A single triangle with per-vertex attributes.

use crate::material::MaterialRef;
use glam::{Vec2, Vec3, Vec4};

/// Triangular rendering primitive.
///
/// Flat-shaded facets carry the same normal on all three vertices. Texture
/// coordinates and material are optional: quads attach both, standalone
/// triangles attach neither.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    /// Vertex positions in winding order
    pub positions: [Vec3; 3],
    /// Per-vertex normals
    pub normals: [Vec3; 3],
    /// Per-vertex RGBA colors
    pub colors: [Vec4; 3],
    /// Per-vertex texture coordinates
    pub tex_coords: Option<[Vec2; 3]>,
    /// Shared surface material
    pub material: Option<MaterialRef>,
}

impl Facet {
    /// Creates a flat-shaded, untextured facet.
    pub fn flat(positions: [Vec3; 3], normal: Vec3, color: Vec4) -> Self {
        Self {
            positions,
            normals: [normal; 3],
            colors: [color; 3],
            tex_coords: None,
            material: None,
        }
    }

    /// Attaches texture coordinates.
    pub fn with_tex_coords(mut self, tex_coords: [Vec2; 3]) -> Self {
        self.tex_coords = Some(tex_coords);
        self
    }

    /// Attaches a material reference.
    pub fn with_material(mut self, material: Option<MaterialRef>) -> Self {
        self.material = material;
        self
    }

    /// Normal implied by the winding, `normalize((p2 - p0) × (p1 - p0))`.
    ///
    /// This is the convention every primitive in this crate uses; swapping
    /// two positions negates the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use facet_mesh::Facet;
    /// use glam::{Vec3, Vec4};
    ///
    /// let f = Facet::flat([Vec3::ZERO, Vec3::X, Vec3::Y], Vec3::ZERO, Vec4::ONE);
    /// assert_eq!(f.face_normal(), Vec3::NEG_Z);
    /// ```
    pub fn face_normal(&self) -> Vec3 {
        winding_normal(self.positions[0], self.positions[1], self.positions[2])
    }

    /// Surface area of the triangle.
    pub fn area(&self) -> f32 {
        let [p0, p1, p2] = self.positions;
        (p1 - p0).cross(p2 - p0).length() * 0.5
    }

    /// Returns true if all three vertex normals are identical.
    pub fn is_flat_shaded(&self) -> bool {
        self.normals[0] == self.normals[1] && self.normals[1] == self.normals[2]
    }
}

/// Unit normal for the ordered corners `v1, v2, v3`.
///
/// Computed as `(v3 - v1) × (v2 - v1)` and normalized without any guard: a
/// degenerate triangle yields NaN components.
#[inline]
pub fn winding_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    (v3 - v1).cross(v2 - v1).normalize()
}
