//! # Config Crate
//!
//! Centralized configuration constants for procedural facet generation.
//! Tolerances, tessellation defaults and fallback surface values live here
//! so the geometry crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, DEFAULT_SPHERE_RESOLUTION, POLE_TOLERANCE};
//!
//! // Pole detection on the sphere grid
//! let theta = std::f32::consts::PI - 1e-6;
//! assert!(approx_equal(theta, std::f32::consts::PI, POLE_TOLERANCE));
//!
//! // Resolution fallback when the caller does not care
//! let requested: Option<u32> = None;
//! assert_eq!(requested.unwrap_or(DEFAULT_SPHERE_RESOLUTION), DEFAULT_SPHERE_RESOLUTION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Renderer-Facing Precision**: Values are `f32`, matching facet storage
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
