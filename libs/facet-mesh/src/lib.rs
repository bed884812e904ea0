//! # Facet Mesh
//!
//! Procedural generation of renderable facets.
//! Synthesizes triangles, quads, boxes and spheres into a caller-owned
//! facet collection, attaching normals, colors, texture coordinates and a
//! shared material reference.
//!
//! ## Architecture
//!
//! ```text
//! SurfaceState + shape parameters → primitives → FacetSink (FacetSet / Vec<Facet>)
//! ```
//!
//! ## Behavior
//!
//! The primitives are permissive: every input is accepted and degenerate
//! geometry produces structurally valid facets with NaN or zero normals.
//! Validation lives in [`checked`], which wraps the primitives.
//!
//! ## Usage
//!
//! ```rust
//! use facet_mesh::{make_box, FacetSet, Material, SurfaceState};
//! use glam::{Vec3, Vec4};
//! use std::sync::Arc;
//!
//! let stone = Arc::new(Material::named("stone"));
//! let state = SurfaceState::new(Vec4::ONE, Some(stone));
//!
//! let mut facets = FacetSet::new();
//! make_box(&mut facets, &state, Vec3::ZERO, Vec3::splat(2.0));
//! assert_eq!(facets.len(), 10);
//! ```

pub mod checked;
pub mod error;
pub mod facet;
pub mod facet_set;
pub mod material;
pub mod primitives;
pub mod surface;

pub use error::MeshError;
pub use facet::Facet;
pub use facet_set::{FacetSet, FacetSink};
pub use material::{Material, MaterialRef};
pub use primitives::{add_square, add_triangle, make_box, make_box_with_states, make_sphere};
pub use surface::{StateCursor, SurfaceDefaults, SurfaceState};
