//! # Material
//!
//! Opaque surface material shared between facets.
//!
//! Materials are owned by whoever loads them. Facets only hold a
//! reference-counted handle and the builder never reads or mutates the
//! contents.

use glam::Vec4;
use std::sync::Arc;

/// Shared, non-owning material handle attached to facets.
pub type MaterialRef = Arc<Material>;

/// Lighting parameters of a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Human-readable identifier
    pub name: String,
    /// Ambient reflectance (RGBA)
    pub ambient: Vec4,
    /// Diffuse reflectance (RGBA)
    pub diffuse: Vec4,
    /// Specular reflectance (RGBA)
    pub specular: Vec4,
    /// Specular exponent
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            ambient: Vec4::new(0.2, 0.2, 0.2, 1.0),
            diffuse: Vec4::new(0.8, 0.8, 0.8, 1.0),
            specular: Vec4::new(0.0, 0.0, 0.0, 1.0),
            shininess: 0.0,
        }
    }
}

impl Material {
    /// Creates a default material with the given name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use facet_mesh::Material;
    ///
    /// let m = Material::named("brick");
    /// assert_eq!(m.name, "brick");
    /// ```
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Wraps the material in a shared handle.
    pub fn into_ref(self) -> MaterialRef {
        Arc::new(self)
    }
}

/// Returns true if both handles point at the same material instance.
///
/// Content equality is not identity: two materials with equal fields are
/// still distinct surfaces.
#[inline]
pub fn same_material(a: Option<&MaterialRef>, b: Option<&MaterialRef>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
