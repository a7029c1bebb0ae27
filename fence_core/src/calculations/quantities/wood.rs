//! Wood fence quantities.
//!
//! ```text
//! rails       = fence_sections × rail_count
//! pickets     = ceil(fenceable_in / (board_width + board_spacing))
//!               × 1.5 (rounded up) for board-on-board
//! screw_boxes = ceil(pickets × rail_count × 2 / 100)
//! ```
//!
//! The board-on-board 1.5 factor approximates the overlap of boards on
//! alternating faces. It is an estimating constant, not a structural value.

use super::Item;
use crate::calculations::geometry::Topology;
use crate::calculations::{ceil_count, ceil_div};
use crate::materials::{WoodOptions, WoodStyle};

/// Screws per board per rail (one at each edge)
pub const SCREWS_PER_BOARD_PER_RAIL: u64 = 2;

/// Screws per box
pub const SCREWS_PER_BOX: u64 = 100;

/// Board count multiplier for board-on-board, as a ratio (3/2)
const BOARD_ON_BOARD_NUM: u64 = 3;
const BOARD_ON_BOARD_DEN: u64 = 2;

pub fn quantities(opts: &WoodOptions, height_ft: u32, topology: &Topology) -> Vec<(Item, u64)> {
    let rail_count = u64::from(opts.rail_count(height_ft));
    let rails = topology.fence_sections.saturating_mul(rail_count);

    let mut items = vec![
        (Item::LinePosts, topology.line_posts),
        (Item::CornerPosts, topology.corner_posts),
        (Item::EndPosts, topology.end_posts),
        (Item::GatePosts, topology.gate_posts),
        (Item::Rails, rails),
    ];

    if opts.style.has_boards() {
        let pickets = picket_count(opts, topology);
        let screws = pickets
            .saturating_mul(rail_count)
            .saturating_mul(SCREWS_PER_BOARD_PER_RAIL);
        let screw_boxes = ceil_div(screws, SCREWS_PER_BOX);
        items.push((Item::Pickets, pickets));
        items.push((Item::ScrewBoxes, screw_boxes));
    }

    items
}

/// Boards needed to cover the fenceable length
pub fn picket_count(opts: &WoodOptions, topology: &Topology) -> u64 {
    let module_in = opts.board_module_in();
    if module_in <= 0.0 || topology.is_empty() {
        return 0;
    }
    let single_face = ceil_count((topology.fenceable_length_in() / module_in).value());
    match opts.style {
        WoodStyle::BoardOnBoard => ceil_div(single_face.saturating_mul(BOARD_ON_BOARD_NUM), BOARD_ON_BOARD_DEN),
        _ => single_face,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::geometry::resolve;
    use crate::materials::{MaterialOptions, WoodOptions};
    use crate::project::ProjectSpec;

    fn topology_for(length: f64, opts: &WoodOptions) -> Topology {
        let spec = ProjectSpec {
            length,
            material: MaterialOptions::Wood(opts.clone()),
            ..ProjectSpec::default()
        };
        resolve(&spec).unwrap()
    }

    fn lookup(items: &[(Item, u64)], item: Item) -> Option<u64> {
        items.iter().find(|(i, _)| *i == item).map(|(_, q)| *q)
    }

    #[test]
    fn test_privacy_fence() {
        let opts = WoodOptions::default();
        let topo = topology_for(150.0, &opts);
        let items = quantities(&opts, 6, &topo);

        // 19 sections × 3 rails
        assert_eq!(lookup(&items, Item::Rails), Some(57));
        // 1800 in / 5.5 in = 327.3 → 328
        assert_eq!(lookup(&items, Item::Pickets), Some(328));
        // 328 × 3 × 2 = 1968 screws → 20 boxes
        assert_eq!(lookup(&items, Item::ScrewBoxes), Some(20));
        assert_eq!(lookup(&items, Item::LinePosts), Some(20));
    }

    #[test]
    fn test_board_on_board_multiplier() {
        let opts = WoodOptions {
            style: WoodStyle::BoardOnBoard,
            ..WoodOptions::default()
        };
        let topo = topology_for(150.0, &opts);
        // ceil(328 × 1.5) = 492
        assert_eq!(picket_count(&opts, &topo), 492);

        let topo = topology_for(5.5 * 3.0 / 12.0, &opts);
        // 3 boards single face → ceil(4.5) = 5
        assert_eq!(picket_count(&opts, &topo), 5);
    }

    #[test]
    fn test_picket_spacing() {
        let opts = WoodOptions {
            style: WoodStyle::Picket,
            board_width_in: 3.5,
            board_spacing_in: 2.5,
            ..WoodOptions::default()
        };
        let topo = topology_for(50.0, &opts);
        // 600 in / 6 in = 100
        assert_eq!(picket_count(&opts, &topo), 100);
    }

    #[test]
    fn test_split_rail_has_no_boards() {
        let opts = WoodOptions {
            style: WoodStyle::SplitRail,
            ..WoodOptions::default()
        };
        let topo = topology_for(80.0, &opts);
        let items = quantities(&opts, 4, &topo);
        assert_eq!(lookup(&items, Item::Pickets), None);
        assert_eq!(lookup(&items, Item::ScrewBoxes), None);
        // 10 sections × 2 rails at 4 ft
        assert_eq!(lookup(&items, Item::Rails), Some(20));
    }

    #[test]
    fn test_rail_override() {
        let opts = WoodOptions {
            rail_count: Some(4),
            ..WoodOptions::default()
        };
        let topo = topology_for(80.0, &opts);
        let items = quantities(&opts, 4, &topo);
        assert_eq!(lookup(&items, Item::Rails), Some(40));
    }

    #[test]
    fn test_tiny_spacing_saturates_instead_of_overflowing() {
        let opts = WoodOptions {
            style: WoodStyle::BoardOnBoard,
            post_spacing_ft: 1e-300,
            board_width_in: 1e-300,
            board_spacing_in: 0.0,
            ..WoodOptions::default()
        };
        let topo = topology_for(100.0, &opts);
        let items = quantities(&opts, 6, &topo);
        assert_eq!(lookup(&items, Item::Rails), Some(u64::MAX));
        assert_eq!(lookup(&items, Item::Pickets), Some(u64::MAX.div_ceil(2)));
        assert_eq!(lookup(&items, Item::ScrewBoxes), Some(u64::MAX.div_ceil(SCREWS_PER_BOX)));
    }

    #[test]
    fn test_zero_length_is_all_zero() {
        let opts = WoodOptions::default();
        let topo = topology_for(0.0, &opts);
        let items = quantities(&opts, 6, &topo);
        assert!(items.iter().all(|(_, q)| *q == 0));
    }
}
