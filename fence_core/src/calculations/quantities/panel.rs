//! Panel-system quantities: vinyl, aluminum and composite.
//!
//! All three ship as prefabricated panels, so the counts reduce to panels
//! and posts:
//!
//! ```text
//! panels = ceil(fenceable / panel_width)
//! posts  = panels + 1 + corners + end_posts + gate_posts   (0 with no panels)
//! ```
//!
//! Vinyl adds two rail brackets per post and optional post caps.

use super::Item;
use crate::calculations::ceil_count;
use crate::calculations::geometry::Topology;
use crate::materials::composite::SECTION_WIDTH_FT;
use crate::materials::{AluminumOptions, CompositeOptions, VinylOptions};

/// Rail brackets per vinyl post
pub const BRACKETS_PER_POST: u64 = 2;

/// Panels needed for the fenceable length
pub fn panel_count(panel_width_ft: f64, topology: &Topology) -> u64 {
    if panel_width_ft <= 0.0 {
        return 0;
    }
    ceil_count(topology.fenceable_length_ft / panel_width_ft)
}

/// Posts for a panel system
pub fn panel_posts(panels: u64, topology: &Topology) -> u64 {
    if panels == 0 {
        return 0;
    }
    panels.saturating_add(1).saturating_add(topology.terminal_posts())
}

pub fn vinyl_quantities(opts: &VinylOptions, topology: &Topology) -> Vec<(Item, u64)> {
    let panels = panel_count(opts.panel_width_ft, topology);
    let posts = panel_posts(panels, topology);

    let mut items = vec![
        (Item::Posts, posts),
        (Item::Panels, panels),
        (Item::Brackets, posts.saturating_mul(BRACKETS_PER_POST)),
    ];
    if opts.post_caps {
        items.push((Item::PostCaps, posts));
    }
    items
}

pub fn aluminum_quantities(opts: &AluminumOptions, topology: &Topology) -> Vec<(Item, u64)> {
    let panels = panel_count(opts.panel_width_ft, topology);
    vec![(Item::Posts, panel_posts(panels, topology)), (Item::Panels, panels)]
}

pub fn composite_quantities(_opts: &CompositeOptions, topology: &Topology) -> Vec<(Item, u64)> {
    let panels = panel_count(SECTION_WIDTH_FT, topology);
    vec![(Item::Posts, panel_posts(panels, topology)), (Item::Panels, panels)]
}
