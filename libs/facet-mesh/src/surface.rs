//! # Surface State
//!
//! Fill color and material bundle applied to generated facets, the explicit
//! defaults value that stands in for hidden builder state, and the cursor
//! that hands out per-face states during box assembly.

use crate::material::{Material, MaterialRef};
use config::constants::{DEFAULT_COLOR, UNSET_COLOR};
use glam::Vec4;

/// Color plus shared material reference for generated facets.
///
/// The default state is "unset": transparent black and no material.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    /// RGBA fill color assigned to every vertex
    pub color: Vec4,
    /// Shared material, attached by primitives that carry one
    pub material: Option<MaterialRef>,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            color: Vec4::from_array(UNSET_COLOR),
            material: None,
        }
    }
}

impl SurfaceState {
    /// Creates a surface state.
    pub fn new(color: Vec4, material: Option<MaterialRef>) -> Self {
        Self { color, material }
    }

    /// Creates a state with a color and no material.
    ///
    /// # Example
    ///
    /// ```rust
    /// use facet_mesh::SurfaceState;
    /// use glam::Vec4;
    ///
    /// let red = SurfaceState::colored(Vec4::new(1.0, 0.0, 0.0, 1.0));
    /// assert!(red.material.is_none());
    /// ```
    pub fn colored(color: Vec4) -> Self {
        Self {
            color,
            material: None,
        }
    }

    /// Returns true if this is the unset default state.
    pub fn is_unset(&self) -> bool {
        self.material.is_none() && self.color == Vec4::from_array(UNSET_COLOR)
    }
}

/// Explicit default configuration for callers that do not manage their own
/// surfaces.
///
/// Holds a fill color and a freshly created material. Pass
/// [`SurfaceDefaults::surface`] at call sites instead of relying on any
/// shared builder instance.
///
/// # Example
///
/// ```rust
/// use facet_mesh::{add_square, FacetSet, SurfaceDefaults};
/// use glam::Vec3;
///
/// let defaults = SurfaceDefaults::new();
/// let mut facets = FacetSet::new();
/// add_square(&mut facets, &defaults.surface(), Vec3::ZERO, Vec3::Y, Vec3::ONE, Vec3::X);
/// assert_eq!(facets.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SurfaceDefaults {
    /// Fill color
    pub color: Vec4,
    /// Material shared by every facet built from these defaults
    pub material: MaterialRef,
}

impl Default for SurfaceDefaults {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceDefaults {
    /// Opaque white with a new default material.
    pub fn new() -> Self {
        Self {
            color: Vec4::from_array(DEFAULT_COLOR),
            material: Material::default().into_ref(),
        }
    }

    /// Replaces the fill color.
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }

    /// Surface state referencing the shared default material.
    pub fn surface(&self) -> SurfaceState {
        SurfaceState::new(self.color, Some(self.material.clone()))
    }
}

/// Ordered, non-consuming reader over a caller's surface states.
///
/// Each call to [`StateCursor::next_state`] yields the next state in
/// sequence; once the slice is exhausted the unset default is returned.
/// The caller's slice is never modified.
#[derive(Debug)]
pub struct StateCursor<'a> {
    states: &'a [SurfaceState],
    next: usize,
    fallback: SurfaceState,
}

impl<'a> StateCursor<'a> {
    /// Creates a cursor positioned at the first state.
    pub fn new(states: &'a [SurfaceState]) -> Self {
        Self {
            states,
            next: 0,
            fallback: SurfaceState::default(),
        }
    }

    /// Returns the next state, or the unset default once exhausted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use facet_mesh::{StateCursor, SurfaceState};
    /// use glam::Vec4;
    ///
    /// let states = [SurfaceState::colored(Vec4::ONE)];
    /// let mut cursor = StateCursor::new(&states);
    /// assert_eq!(cursor.next_state().color, Vec4::ONE);
    /// assert!(cursor.next_state().is_unset());
    /// ```
    pub fn next_state(&mut self) -> &SurfaceState {
        match self.states.get(self.next) {
            Some(state) => {
                self.next += 1;
                state
            }
            None => &self.fallback,
        }
    }

    /// Number of caller states handed out so far.
    pub fn consumed(&self) -> usize {
        self.next
    }

    /// Number of caller states not yet handed out.
    pub fn remaining(&self) -> usize {
        self.states.len() - self.next
    }
}
