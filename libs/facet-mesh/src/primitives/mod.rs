//! # Primitives
//!
//! Facet generation for triangles, quads, boxes and spheres.
//!
//! Every function appends to a caller-owned [`FacetSink`](crate::FacetSink)
//! and returns nothing; success is observed through the growth of the sink.
//! Inputs are never validated here, see [`crate::checked`].
//!
//! ## Winding
//!
//! Normals follow `(v3 - v1) × (v2 - v1)` for corners passed in order
//! `v1, v2, v3`. Passing two corners swapped flips the normal silently.

pub mod cuboid;
pub mod quad;
pub mod sphere;
pub mod triangle;

pub use cuboid::{box_corners, make_box, make_box_with_states};
pub use quad::add_square;
pub use sphere::{grid_steps, make_sphere};
pub use triangle::add_triangle;
