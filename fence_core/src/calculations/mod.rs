//! # Fence Takeoff Calculations
//!
//! The takeoff runs four pure sub-calculations in a single pass:
//!
//! ```text
//! ProjectSpec ──► geometry::resolve ──► Topology
//!                                         │
//!                     ┌───────────────────┴──────────────────┐
//!                     ▼                                      ▼
//!        quantities::material_items            concrete::post_depth
//!                     └──────────► BillOfQuantities ◄────────┘
//!                                         │
//!                                         ▼
//!                               cost::estimate_cost ──► CostEstimate
//! ```
//!
//! Every stage is a deterministic function of its inputs; nothing is cached
//! and nothing is written anywhere.
//!
//! ## Example
//!
//! ```rust
//! use fence_core::calculations::compute_fence_project;
//! use fence_core::materials::MaterialKind;
//! use fence_core::project::ProjectSpec;
//!
//! let spec = ProjectSpec::for_material(MaterialKind::ChainLink, 150.0, 6);
//! let takeoff = compute_fence_project(&spec).unwrap();
//!
//! use fence_core::calculations::quantities::Item;
//! assert_eq!(takeoff.bill_of_quantities.quantity(Item::FabricRolls), 3);
//! ```

pub mod concrete;
pub mod cost;
pub mod geometry;
pub mod quantities;

pub use concrete::{post_depth, PostDepth};
pub use cost::{estimate_cost, CostEstimate, CostRange};
pub use geometry::{resolve, Topology};
pub use quantities::{BillOfQuantities, Item, LineItem};

use serde::{Deserialize, Serialize};

use crate::errors::FenceResult;
use crate::pricing::PriceTables;
use crate::project::ProjectSpec;

/// Ratios within this distance below a whole number round to that number,
/// so `150.0 / 50.0` computed through a unit conversion still yields 3.
pub(crate) const CEIL_TOLERANCE: f64 = 1e-9;

/// Round a non-negative ratio up to a whole count.
///
/// NaN, infinities and non-positive values yield 0.
pub(crate) fn ceil_count(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value - CEIL_TOLERANCE).ceil().max(0.0) as u64
}

/// Integer ceiling division for counts
pub(crate) fn ceil_div(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    numerator.div_ceil(denominator)
}

/// Everything the engine derives from one [`ProjectSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenceTakeoff {
    pub topology: Topology,
    pub bill_of_quantities: BillOfQuantities,
    pub post_depth: PostDepth,
    pub cost: CostEstimate,
}

/// Run a full takeoff with the standard price tables.
///
/// # Arguments
///
/// * `spec` - Project input. It is sanitized (clamped) before use.
///
/// # Returns
///
/// * `Ok(FenceTakeoff)` - Topology, quantities, post depth and cost
/// * `Err(FenceError)` - Height not stocked for the material, or a zero spacing
pub fn compute_fence_project(spec: &ProjectSpec) -> FenceResult<FenceTakeoff> {
    compute_fence_project_with(spec, PriceTables::standard())
}

/// Run a full takeoff against caller-supplied price tables.
pub fn compute_fence_project_with(spec: &ProjectSpec, prices: &PriceTables) -> FenceResult<FenceTakeoff> {
    let spec = spec.sanitized();
    spec.validate()?;

    let topology = geometry::resolve(&spec)?;
    let raw_items = quantities::material_items(&spec, &topology);
    let post_depth = concrete::post_depth(&spec, quantities::post_count(&raw_items));
    let bill_of_quantities = quantities::assemble(&spec, &topology, raw_items, &post_depth);
    let cost = cost::estimate_cost(&bill_of_quantities, &topology, &spec, prices);

    tracing::debug!(
        material = %spec.material.kind(),
        length_ft = topology.length_ft,
        fenceable_ft = topology.fenceable_length_ft,
        sections = topology.fence_sections,
        posts = topology.total_posts,
        "fence takeoff computed"
    );

    Ok(FenceTakeoff {
        topology,
        bill_of_quantities,
        post_depth,
        cost,
    })
}
