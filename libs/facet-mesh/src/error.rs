//! # Mesh Errors
//!
//! Error types for the checked construction layer. The primitives themselves
//! never fail.

use config::constants::ConfigError;
use glam::Vec3;
use thiserror::Error;

/// Errors reported by [`crate::checked`] before geometry is emitted.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// Invalid configuration snapshot
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Degenerate geometry (zero area, non-finite coordinates)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Sphere radius is zero, negative or non-finite
    #[error("Sphere radius must be positive and finite: {radius}")]
    InvalidRadius { radius: f32 },

    /// Box extent is zero, negative or non-finite
    #[error("Box size must be positive and finite: {size}")]
    InvalidSize { size: Vec3 },

    /// Sphere resolution out of range
    #[error("Sphere resolution must be in {min}..={max}: {resolution}")]
    InvalidResolution { resolution: u32, min: u32, max: u32 },

    /// Computed face normal points away from the expected direction
    #[error("Winding mismatch: normal {normal} faces away from {expected}")]
    WindingMismatch { normal: Vec3, expected: Vec3 },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a winding mismatch error.
    pub fn winding(normal: Vec3, expected: Vec3) -> Self {
        Self::WindingMismatch { normal, expected }
    }
}
