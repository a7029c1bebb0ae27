//! # Geometry Resolver
//!
//! Turns the raw run length, gates and post layout into the fenceable
//! length and the post topology every other stage works from.
//!
//! ## Formulas
//!
//! ```text
//! fenceable      = max(0, length_ft − Σ gate_count × gate_width)
//! fence_sections = ceil(fenceable / spacing)
//! line_posts     = max(0, fence_sections + 1 − corners − end_posts)
//! gate_posts     = 2 × (walk_gates + drive_gates)
//! total_posts    = line_posts + corners + end_posts + gate_posts
//! ```
//!
//! When there is no fenceable length there is nothing to build, and every
//! post and gate count collapses to zero. Counts saturate at `u64::MAX`
//! rather than wrapping when a tiny spacing divides a long run.

use serde::{Deserialize, Serialize};

use super::ceil_count;
use crate::errors::{FenceError, FenceResult};
use crate::project::{spacing_field, ProjectSpec};
use crate::units::{Feet, Inches};

/// Post layout derived from a project spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    /// Total run in feet (after unit conversion)
    pub length_ft: f64,
    /// Combined width of all gate openings (ft)
    pub total_gate_width_ft: f64,
    /// Run minus gate openings, never negative (ft)
    pub fenceable_length_ft: f64,
    /// Post-to-post spacing used for sectioning (ft)
    pub spacing_ft: f64,
    pub fence_sections: u64,
    pub line_posts: u64,
    pub corner_posts: u64,
    pub end_posts: u64,
    pub gate_posts: u64,
    pub walk_gates: u64,
    pub drive_gates: u64,
    /// Post positions implied by the layout.
    ///
    /// Wood and chain link order exactly this many posts. Panel systems
    /// (vinyl, aluminum, composite) count `panels + 1` plus every terminal
    /// post, which can be more; the ordered count for any material is
    /// `BillOfQuantities::total_posts`, also carried as `PostDepth::post_count`.
    pub total_posts: u64,
}

impl Topology {
    /// Posts that carry lateral tension: corners, ends and gate posts
    pub fn terminal_posts(&self) -> u64 {
        self.corner_posts
            .saturating_add(self.end_posts)
            .saturating_add(self.gate_posts)
    }

    pub fn gate_count(&self) -> u64 {
        self.walk_gates.saturating_add(self.drive_gates)
    }

    /// True when there is no fence to build
    pub fn is_empty(&self) -> bool {
        self.fence_sections == 0
    }

    pub fn fenceable_length(&self) -> Feet {
        Feet(self.fenceable_length_ft)
    }

    pub fn fenceable_length_in(&self) -> Inches {
        self.fenceable_length().into()
    }
}

/// Resolve the post topology for a spec.
///
/// Lengths and gate widths are clamped to ≥ 0 here as well, so an
/// unsanitized spec cannot produce negative geometry.
///
/// # Errors
///
/// Returns `InvalidInput` when the material's spacing is zero, negative or
/// not finite, instead of dividing by it.
///
/// # Example
///
/// ```rust
/// use fence_core::calculations::geometry::resolve;
/// use fence_core::project::ProjectSpec;
///
/// let mut spec = ProjectSpec::default(); // wood, 8 ft post spacing
/// spec.length = 150.0;
/// let topo = resolve(&spec).unwrap();
/// assert_eq!(topo.fence_sections, 19);
/// assert_eq!(topo.total_posts, 20);
/// ```
pub fn resolve(spec: &ProjectSpec) -> FenceResult<Topology> {
    let spacing_ft = spec.material.spacing_ft();
    if !(spacing_ft.is_finite() && spacing_ft > 0.0) {
        return Err(FenceError::invalid_input(
            spacing_field(&spec.material),
            spacing_ft.to_string(),
            "Post spacing must be positive",
        ));
    }

    let length_ft = spec.length_ft().clamp_non_negative();
    let walk_width = Feet(spec.walk_gates.width_ft).clamp_non_negative();
    let drive_width = Feet(spec.drive_gates.width_ft).clamp_non_negative();
    let total_gate_width_ft =
        walk_width * f64::from(spec.walk_gates.count) + drive_width * f64::from(spec.drive_gates.count);
    let fenceable = (length_ft - total_gate_width_ft).clamp_non_negative();

    let fence_sections = ceil_count(fenceable.value() / spacing_ft);

    let (corner_posts, end_posts, walk_gates, drive_gates) = if fence_sections == 0 {
        (0, 0, 0, 0)
    } else {
        (
            u64::from(spec.corners),
            u64::from(spec.end_posts),
            u64::from(spec.walk_gates.count),
            u64::from(spec.drive_gates.count),
        )
    };

    let line_posts = if fence_sections == 0 {
        0
    } else {
        fence_sections
            .saturating_add(1)
            .saturating_sub(corner_posts + end_posts)
    };
    let gate_posts = 2 * (walk_gates + drive_gates);
    let total_posts = line_posts
        .saturating_add(corner_posts)
        .saturating_add(end_posts)
        .saturating_add(gate_posts);

    Ok(Topology {
        length_ft: length_ft.value(),
        total_gate_width_ft: total_gate_width_ft.value(),
        fenceable_length_ft: fenceable.value(),
        spacing_ft,
        fence_sections,
        line_posts,
        corner_posts,
        end_posts,
        gate_posts,
        walk_gates,
        drive_gates,
        total_posts,
    })
}
