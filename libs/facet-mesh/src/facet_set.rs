//! # Facet Collection
//!
//! Append-only, order-preserving container that receives generated facets.
//!
//! Primitives write through the [`FacetSink`] trait so callers can collect
//! into a [`FacetSet`], a plain `Vec<Facet>`, or their own scene container.

use crate::facet::Facet;
use glam::Vec3;

/// Append operation consumed by every primitive.
///
/// Implementations must preserve insertion order. Primitives never read
/// back from the sink.
pub trait FacetSink {
    /// Appends one facet, taking ownership.
    fn push_facet(&mut self, facet: Facet);
}

impl FacetSink for Vec<Facet> {
    #[inline]
    fn push_facet(&mut self, facet: Facet) {
        self.push(facet);
    }
}

/// Ordered collection of facets.
///
/// All geometry is stored in f32, the precision renderers consume.
///
/// # Example
///
/// ```rust
/// use facet_mesh::{add_triangle, FacetSet, SurfaceState};
/// use glam::Vec3;
///
/// let mut facets = FacetSet::new();
/// add_triangle(&mut facets, &SurfaceState::default(), Vec3::ZERO, Vec3::Y, Vec3::X);
/// assert_eq!(facets.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetSet {
    facets: Vec<Facet>,
}

impl FacetSink for FacetSet {
    #[inline]
    fn push_facet(&mut self, facet: Facet) {
        self.facets.push(facet);
    }
}

impl FacetSet {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { facets: Vec::new() }
    }

    /// Creates a collection with pre-allocated capacity.
    pub fn with_capacity(facet_count: usize) -> Self {
        Self {
            facets: Vec::with_capacity(facet_count),
        }
    }

    /// Returns the number of facets.
    #[inline]
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// Returns true if no facet has been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Returns the facet at the given index.
    #[inline]
    pub fn facet(&self, index: usize) -> Option<&Facet> {
        self.facets.get(index)
    }

    /// Returns the facets in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Facet] {
        &self.facets
    }

    /// Iterates facets in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Facet> {
        self.facets.iter()
    }

    /// Releases ownership of the facets.
    pub fn into_vec(self) -> Vec<Facet> {
        self.facets
    }

    /// Computes the axis-aligned bounding box of all positions.
    ///
    /// Returns `None` for an empty collection.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.facets.iter().flat_map(|f| f.positions);
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    /// Exports positions as a flattened `[x, y, z, ...]` array, three
    /// vertices per facet.
    pub fn positions_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.facets.len() * 9);
        for facet in &self.facets {
            for p in &facet.positions {
                result.extend_from_slice(&p.to_array());
            }
        }
        result
    }

    /// Exports normals as a flattened `[x, y, z, ...]` array.
    pub fn normals_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.facets.len() * 9);
        for facet in &self.facets {
            for n in &facet.normals {
                result.extend_from_slice(&n.to_array());
            }
        }
        result
    }

    /// Exports colors as a flattened `[r, g, b, a, ...]` array.
    pub fn colors_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.facets.len() * 12);
        for facet in &self.facets {
            for c in &facet.colors {
                result.extend_from_slice(&c.to_array());
            }
        }
        result
    }
}

impl<'a> IntoIterator for &'a FacetSet {
    type Item = &'a Facet;
    type IntoIter = std::slice::Iter<'a, Facet>;

    fn into_iter(self) -> Self::IntoIter {
        self.facets.iter()
    }
}
