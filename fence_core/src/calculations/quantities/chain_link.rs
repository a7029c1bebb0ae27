//! Chain link fence quantities.
//!
//! ```text
//! fabric_rolls   = ceil(fenceable / 50)
//! top_rail       = ceil(fenceable / 10.5)            (if enabled)
//! terminal_posts = corners + end_posts + gate_posts
//! tension_bars   = corners × 2 + end_posts + gate_posts
//! tension_bands  = tension_bars × (height + 1)
//! brace_bands    = corners × 2 + end_posts
//! tie_wires      = ceil(fenceable × 2 × height)
//! privacy_slats  = ceil(fenceable × height / bundle_coverage)
//! barbed_wire    = ceil(fenceable × strands / 1320)
//! ```
//!
//! The tie-wire formula is a rule-of-thumb estimate (roughly one tie every
//! foot on line posts and top rail), not a manufacturer figure.

use super::Item;
use crate::calculations::ceil_count;
use crate::calculations::geometry::Topology;
use crate::materials::chain_link::{BARBED_WIRE_ROLL_FT, FABRIC_ROLL_FT, TENSION_WIRE_COIL_FT, TOP_RAIL_SECTION_FT};
use crate::materials::ChainLinkOptions;
use crate::units::Feet;

/// Tie wires per foot of fence per foot of height
pub const TIE_WIRES_PER_FT_PER_FT_HEIGHT: f64 = 2.0;

pub fn quantities(opts: &ChainLinkOptions, height_ft: u32, topology: &Topology) -> Vec<(Item, u64)> {
    let fenceable = topology.fenceable_length_ft;
    let height = u64::from(height_ft);
    let terminal_posts = topology.terminal_posts();

    let tension_bars = topology.corner_posts * 2 + topology.end_posts + topology.gate_posts;
    let brace_bands = topology.corner_posts * 2 + topology.end_posts;

    let mut items = vec![
        (Item::LinePosts, topology.line_posts),
        (Item::TerminalPosts, terminal_posts),
        (Item::FabricRolls, ceil_count(fenceable / FABRIC_ROLL_FT)),
    ];

    if opts.top_rail {
        items.push((Item::TopRail, ceil_count(fenceable / TOP_RAIL_SECTION_FT)));
    }
    if opts.tension_wire {
        items.push((Item::TensionWire, ceil_count(fenceable / TENSION_WIRE_COIL_FT)));
    }

    items.push((Item::TensionBars, tension_bars));
    items.push((Item::TensionBands, tension_bars * (height + 1)));
    items.push((Item::BraceBands, brace_bands));
    items.push((
        Item::TieWires,
        ceil_count(fenceable * TIE_WIRES_PER_FT_PER_FT_HEIGHT * height as f64),
    ));
    items.push((Item::TerminalCaps, terminal_posts));
    if opts.top_rail {
        items.push((Item::LoopCaps, topology.line_posts));
    }

    if opts.privacy_slats {
        let face_area = topology.fenceable_length() * Feet(f64::from(height_ft));
        items.push((
            Item::PrivacySlats,
            ceil_count((face_area / opts.mesh.slat_bundle_coverage_sqft()).value()),
        ));
    }

    if opts.barbed_wire {
        let strands = f64::from(opts.barbed_wire_strands);
        items.push((Item::BarbedWireRolls, ceil_count(fenceable * strands / BARBED_WIRE_ROLL_FT)));
        items.push((Item::BarbedWireArms, topology.total_posts));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::geometry::resolve;
    use crate::materials::{MaterialKind, MaterialOptions, Mesh};
    use crate::project::{GateSpec, ProjectSpec};

    fn lookup(items: &[(Item, u64)], item: Item) -> Option<u64> {
        items.iter().find(|(i, _)| *i == item).map(|(_, q)| *q)
    }

    fn setup(length: f64, height: u32, opts: ChainLinkOptions) -> (Topology, Vec<(Item, u64)>) {
        let mut spec = ProjectSpec::for_material(MaterialKind::ChainLink, length, height);
        spec.corners = 2;
        spec.end_posts = 2;
        spec.walk_gates = GateSpec::new(1, 0.0);
        spec.material = MaterialOptions::ChainLink(opts.clone());
        let topo = resolve(&spec).unwrap();
        let items = quantities(&opts, height, &topo);
        (topo, items)
    }

    #[test]
    fn test_standard_150ft_run() {
        let (topo, items) = setup(150.0, 6, ChainLinkOptions::default());
        assert_eq!(lookup(&items, Item::FabricRolls), Some(3));
        // corners 2 + ends 2 + gate posts 2
        assert_eq!(lookup(&items, Item::TerminalPosts), Some(6));
        assert_eq!(topo.terminal_posts(), 6);
        // 150 / 10.5 = 14.3 → 15
        assert_eq!(lookup(&items, Item::TopRail), Some(15));
        // 2×2 + 2 + 2
        assert_eq!(lookup(&items, Item::TensionBars), Some(8));
        assert_eq!(lookup(&items, Item::TensionBands), Some(8 * 7));
        assert_eq!(lookup(&items, Item::BraceBands), Some(6));
        assert_eq!(lookup(&items, Item::TieWires), Some(1800));
        assert_eq!(lookup(&items, Item::LoopCaps), Some(topo.line_posts));
    }

    #[test]
    fn test_optional_components_absent_by_default() {
        let (_, items) = setup(100.0, 4, ChainLinkOptions::default());
        assert_eq!(lookup(&items, Item::TensionWire), None);
        assert_eq!(lookup(&items, Item::PrivacySlats), None);
        assert_eq!(lookup(&items, Item::BarbedWireRolls), None);
    }

    #[test]
    fn test_no_top_rail() {
        let opts = ChainLinkOptions {
            top_rail: false,
            tension_wire: true,
            ..ChainLinkOptions::default()
        };
        let (_, items) = setup(250.0, 5, opts);
        assert_eq!(lookup(&items, Item::TopRail), None);
        assert_eq!(lookup(&items, Item::LoopCaps), None);
        assert_eq!(lookup(&items, Item::TensionWire), Some(3));
    }

    #[test]
    fn test_privacy_slats_depend_on_mesh() {
        let mut opts = ChainLinkOptions {
            privacy_slats: true,
            mesh: Mesh::TwoInch,
            ..ChainLinkOptions::default()
        };
        let (_, items) = setup(100.0, 6, opts.clone());
        // 600 sq ft / 50
        assert_eq!(lookup(&items, Item::PrivacySlats), Some(12));

        opts.mesh = Mesh::TwoAndThreeEighths;
        let (_, items) = setup(100.0, 6, opts);
        // 600 sq ft / 60
        assert_eq!(lookup(&items, Item::PrivacySlats), Some(10));
    }

    #[test]
    fn test_barbed_wire() {
        let opts = ChainLinkOptions {
            barbed_wire: true,
            barbed_wire_strands: 3,
            ..ChainLinkOptions::default()
        };
        let (topo, items) = setup(500.0, 6, opts);
        // 1500 strand-ft / 1320 → 2 rolls
        assert_eq!(lookup(&items, Item::BarbedWireRolls), Some(2));
        assert_eq!(lookup(&items, Item::BarbedWireArms), Some(topo.total_posts));
    }

    #[test]
    fn test_zero_length_is_all_zero() {
        let opts = ChainLinkOptions {
            privacy_slats: true,
            barbed_wire: true,
            tension_wire: true,
            ..ChainLinkOptions::default()
        };
        let (_, items) = setup(0.0, 6, opts);
        assert!(items.iter().all(|(_, q)| *q == 0));
    }
}
