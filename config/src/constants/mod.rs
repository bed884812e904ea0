//! # Configuration Constants
//!
//! Centralized constants for facet generation. Each public item documents
//! its purpose and carries a minimal usage example.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Sphere tessellation defaults and limits
//! - **Surface**: Fallback color values
//! - **Box**: Face layout of the box assembly

use thiserror::Error;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Angular tolerance used to detect the polar latitude band of a sphere.
///
/// Grid cells whose polar angle lies within this distance of π are skipped
/// instead of emitting zero-area triangles at the singularity.
///
/// # Example
///
/// ```rust
/// use config::constants::POLE_TOLERANCE;
///
/// let theta = std::f32::consts::PI;
/// assert!((theta - std::f32::consts::PI).abs() < POLE_TOLERANCE);
/// ```
pub const POLE_TOLERANCE: f32 = 1.0e-4;

/// Minimum doubled triangle area accepted by the checked construction layer.
///
/// The permissive core never consults this value.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_AREA_EPSILON;
///
/// let doubled_area = 0.0_f32;
/// assert!(doubled_area < DEGENERATE_AREA_EPSILON);
/// ```
pub const DEGENERATE_AREA_EPSILON: f32 = 1.0e-8;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default sphere resolution (latitude steps; longitude uses twice as many).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SPHERE_RESOLUTION;
/// assert!(DEFAULT_SPHERE_RESOLUTION >= 2);
/// ```
pub const DEFAULT_SPHERE_RESOLUTION: u32 = 16;

/// Lower bound on the sphere resolution accepted by validated configuration
/// and the checked layer.
///
/// At resolution 1 the only latitude band sits on the pole and is skipped,
/// so nothing would be emitted.
///
/// # Example
///
/// ```rust
/// use config::constants::{sphere_facet_count, MIN_SPHERE_RESOLUTION};
/// assert!(sphere_facet_count(MIN_SPHERE_RESOLUTION) > 0);
/// ```
pub const MIN_SPHERE_RESOLUTION: u32 = 2;

/// Upper bound on the sphere resolution accepted by the checked layer.
///
/// Safety limit; a resolution of 1024 already yields about four million
/// facets.
pub const MAX_SPHERE_RESOLUTION: u32 = 1024;

// =============================================================================
// SURFACE CONSTANTS
// =============================================================================

/// Color of an unset surface state (fully transparent black).
///
/// # Example
///
/// ```rust
/// use config::constants::UNSET_COLOR;
/// assert_eq!(UNSET_COLOR, [0.0; 4]);
/// ```
pub const UNSET_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

/// Default fill color used by explicit surface defaults (opaque white).
pub const DEFAULT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// =============================================================================
// BOX CONSTANTS
// =============================================================================

/// Number of quads emitted by the box assembly (front, right, back, left, top).
///
/// The bottom face is not part of the corner wiring.
pub const BOX_FACE_COUNT: usize = 5;

/// Number of facets emitted by the box assembly.
///
/// # Example
///
/// ```rust
/// use config::constants::{BOX_FACET_COUNT, BOX_FACE_COUNT};
/// assert_eq!(BOX_FACET_COUNT, BOX_FACE_COUNT * 2);
/// ```
pub const BOX_FACET_COUNT: usize = BOX_FACE_COUNT * 2;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of facets `make_sphere` emits for a given resolution.
///
/// The grid has `2 * resolution` longitude steps and `resolution` latitude
/// steps, two triangles per cell. The last latitude band lands on the pole and
/// is skipped, so one band's worth of cells never appears.
///
/// # Example
///
/// ```rust
/// use config::constants::sphere_facet_count;
///
/// assert_eq!(sphere_facet_count(4), 48);
/// assert_eq!(sphere_facet_count(1), 0);
/// assert_eq!(sphere_facet_count(0), 0);
/// ```
pub fn sphere_facet_count(resolution: u32) -> usize {
    let res = resolution as usize;
    2 * (2 * res) * res.saturating_sub(1)
}

/// Upper bound on sphere facets before any pole skipping.
///
/// # Example
///
/// ```rust
/// use config::constants::sphere_facet_bound;
/// assert_eq!(sphere_facet_bound(4), 64);
/// ```
pub fn sphere_facet_bound(resolution: u32) -> usize {
    let res = resolution as usize;
    2 * (2 * res) * res
}

/// Checks if two f32 values are within `tolerance` of each other.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-6, 1e-4));
/// assert!(!approx_equal(1.0, 1.1, 1e-4));
/// ```
#[inline]
pub fn approx_equal(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() < tolerance
}

/// Checks if a f32 value is within `tolerance` of zero.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-9, 1e-8));
/// assert!(!approx_zero(0.1, 1e-8));
/// ```
#[inline]
pub fn approx_zero(value: f32, tolerance: f32) -> bool {
    value.abs() < tolerance
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the tunable settings shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.pole_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Angular tolerance for sphere pole detection.
    pub pole_tolerance: f32,
    /// Minimum doubled triangle area the checked layer accepts.
    pub area_epsilon: f32,
    /// Resolution used when callers ask for a default sphere.
    pub default_resolution: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-3, 1.0e-6, 8).expect("valid config");
    /// assert_eq!(cfg.default_resolution, 8);
    /// ```
    pub fn new(
        pole_tolerance: f32,
        area_epsilon: f32,
        default_resolution: u32,
    ) -> Result<Self, ConfigError> {
        if pole_tolerance.is_nan() || pole_tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(pole_tolerance));
        }
        if area_epsilon.is_nan() || area_epsilon < 0.0 {
            return Err(ConfigError::InvalidAreaEpsilon(area_epsilon));
        }
        if !(MIN_SPHERE_RESOLUTION..=MAX_SPHERE_RESOLUTION).contains(&default_resolution) {
            return Err(ConfigError::InvalidResolution(default_resolution));
        }
        Ok(Self {
            pole_tolerance,
            area_epsilon,
            default_resolution,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            pole_tolerance: POLE_TOLERANCE,
            area_epsilon: DEGENERATE_AREA_EPSILON,
            default_resolution: DEFAULT_SPHERE_RESOLUTION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when the pole tolerance is zero, negative or NaN.
    #[error("pole tolerance must be positive: {0}")]
    InvalidTolerance(f32),
    /// Raised when the area epsilon is negative or NaN.
    #[error("area epsilon must be non-negative: {0}")]
    InvalidAreaEpsilon(f32),
    /// Raised when the default resolution is outside the accepted range.
    #[error("default resolution must be in {MIN_SPHERE_RESOLUTION}..={MAX_SPHERE_RESOLUTION}: {0}")]
    InvalidResolution(u32),
}
