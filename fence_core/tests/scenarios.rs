//! End-to-end takeoffs for typical jobs.

use fence_core::calculations::cost::{CostCategory, CostRange};
use fence_core::calculations::quantities::Item;
use fence_core::materials::{MaterialKind, MaterialOptions, PostSize, WoodOptions};
use fence_core::pricing::PriceTables;
use fence_core::project::{BagSize, ConcreteOptions, GateSpec, ProjectSpec, MAX_LENGTH_FT};
use fence_core::units::LengthUnit;
use fence_core::{compute_fence_project, compute_fence_project_with, FenceError};

#[test]
fn wood_privacy_150ft() {
    let spec = ProjectSpec::for_material(MaterialKind::Wood, 150.0, 6);
    let t = compute_fence_project(&spec).unwrap();

    assert_eq!(t.topology.fence_sections, 19);
    assert_eq!(t.topology.total_posts, 20);
    assert_eq!(t.bill_of_quantities.total_posts(), 20);
    assert_eq!(t.bill_of_quantities.quantity(Item::Rails), 57);
    assert_eq!(t.bill_of_quantities.quantity(Item::Pickets), 328);
    assert_eq!(t.post_depth.burial_depth_in, 36);
    assert_eq!(t.post_depth.standard_post_length_ft, 10);
    // 20 posts × 1 bag (80 lb, 4x4)
    assert_eq!(t.bill_of_quantities.quantity(Item::ConcreteBags), 20);
}

#[test]
fn wood_privacy_with_waste_buffer() {
    let mut spec = ProjectSpec::for_material(MaterialKind::Wood, 150.0, 6);
    spec.waste_buffer = true;
    let bom = compute_fence_project(&spec).unwrap().bill_of_quantities;

    assert_eq!(bom.quantity(Item::Pickets), 361);
    assert_eq!(bom.raw(Item::Pickets), 328);
    assert_eq!(bom.quantity(Item::Rails), 63);
    assert_eq!(bom.quantity(Item::ConcreteBags), 22);
    assert_eq!(bom.total_posts(), 20);
}

#[test]
fn chain_link_with_gate_and_corners() {
    let mut spec = ProjectSpec::for_material(MaterialKind::ChainLink, 150.0, 6);
    spec.corners = 2;
    spec.end_posts = 2;
    spec.walk_gates = GateSpec::new(1, 4.0);
    let t = compute_fence_project(&spec).unwrap();
    let bom = &t.bill_of_quantities;

    // 146 fenceable / 50 ft rolls
    assert_eq!(bom.quantity(Item::FabricRolls), 3);
    assert_eq!(bom.quantity(Item::TerminalPosts), 2 + 2 + 2);
    assert_eq!(
        bom.quantity(Item::TerminalPosts),
        t.topology.corner_posts + t.topology.end_posts + t.topology.gate_posts
    );
    assert_eq!(bom.quantity(Item::GateHardwareKits), 1);
    assert_eq!(t.cost.category_total(CostCategory::Gates), CostRange::new(100.0, 250.0));
}

#[test]
fn concrete_ratio_4x4_50lb_matches_6x6_80lb() {
    let mut light = ProjectSpec::for_material(MaterialKind::Wood, 100.0, 6);
    light.concrete = ConcreteOptions {
        enabled: true,
        bag_size: BagSize::Lb50,
    };

    let mut heavy = light.clone();
    heavy.material = MaterialOptions::Wood(WoodOptions {
        post_size: PostSize::SixBySix,
        ..WoodOptions::default()
    });
    heavy.concrete.bag_size = BagSize::Lb80;

    let a = compute_fence_project(&light).unwrap();
    let b = compute_fence_project(&heavy).unwrap();
    let posts = a.topology.total_posts;
    let expected = (posts * 3).div_ceil(2);

    assert_eq!(a.post_depth.total_bags, expected);
    assert_eq!(b.post_depth.total_bags, expected);
}

#[test]
fn metric_length_matches_feet() {
    let mut metric = ProjectSpec::for_material(MaterialKind::Vinyl, 100.0, 6);
    metric.unit = LengthUnit::Meters;
    let imperial = ProjectSpec::for_material(MaterialKind::Vinyl, 328.084, 6);

    let m = compute_fence_project(&metric).unwrap();
    let f = compute_fence_project(&imperial).unwrap();
    assert!((m.topology.length_ft - 328.084).abs() < 1e-9);
    assert_eq!(m.topology.fence_sections, f.topology.fence_sections);
    assert_eq!(m.bill_of_quantities, f.bill_of_quantities);
}

#[test]
fn zero_length_is_empty() {
    for kind in MaterialKind::ALL {
        let t = compute_fence_project(&ProjectSpec::for_material(kind, 0.0, 4)).unwrap();
        assert_eq!(t.topology.total_posts, 0, "{kind}");
        assert!(t.bill_of_quantities.is_empty(), "{kind}");
        assert_eq!(t.cost.total_material, CostRange::ZERO, "{kind}");
        assert_eq!(t.cost.per_foot.material, CostRange::ZERO, "{kind}");
    }
}

#[test]
fn run_consumed_by_drive_gate() {
    let mut spec = ProjectSpec::for_material(MaterialKind::Aluminum, 10.0, 4);
    spec.drive_gates = GateSpec::new(1, 12.0);
    spec.corners = 2;
    let t = compute_fence_project(&spec).unwrap();

    assert_eq!(t.topology.fenceable_length_ft, 0.0);
    assert_eq!(t.topology.gate_posts, 0);
    assert_eq!(t.topology.total_posts, 0);
    assert!(!t.bill_of_quantities.contains(Item::GateHardwareKits));
    assert_eq!(t.cost.professional, CostRange::ZERO);
}

#[test]
fn huge_lengths_are_capped() {
    let mut wood = ProjectSpec::for_material(MaterialKind::Wood, 1e30, 6);
    wood.waste_buffer = true;
    let t = compute_fence_project(&wood).unwrap();
    assert_eq!(t.topology.length_ft, MAX_LENGTH_FT);
    // 100,000 / 8
    assert_eq!(t.topology.fence_sections, 12_500);
    assert_eq!(t.bill_of_quantities.total_posts(), 12_501);
    assert!(t.cost.professional.high.is_finite());

    let mut vinyl = ProjectSpec::for_material(MaterialKind::Vinyl, 1e308, 6);
    vinyl.unit = LengthUnit::Meters;
    let t = compute_fence_project(&vinyl).unwrap();
    assert_eq!(t.topology.length_ft, MAX_LENGTH_FT);
    assert_eq!(t.bill_of_quantities.quantity(Item::Panels), 16_667);
    assert!(!t.topology.is_empty());
}

#[test]
fn panel_posts_differ_from_layout_posts() {
    let mut spec = ProjectSpec::for_material(MaterialKind::Vinyl, 100.0, 6);
    spec.corners = 2;
    spec.end_posts = 1;
    let t = compute_fence_project(&spec).unwrap();

    // 17 sections + 1 positions, corners and ends replace line posts
    assert_eq!(t.topology.total_posts, 18);
    // 17 panels + 1 + 3 terminals
    assert_eq!(t.bill_of_quantities.total_posts(), 21);
    assert_eq!(t.post_depth.post_count, t.bill_of_quantities.total_posts());
}

#[test]
fn per_foot_is_total_over_length() {
    let mut spec = ProjectSpec::for_material(MaterialKind::Composite, 137.0, 6);
    spec.walk_gates = GateSpec::new(1, 4.0);
    spec.include_permit = true;
    let cost = compute_fence_project(&spec).unwrap().cost;

    let cents = |v: f64| (v * 100.0).round() / 100.0;
    assert_eq!(cost.per_foot.material.low, cents(cost.total_material.low / 137.0));
    assert_eq!(cost.per_foot.material.high, cents(cost.total_material.high / 137.0));
    assert_eq!(cost.per_foot.professional.low, cents(cost.professional.low / 137.0));
}

#[test]
fn unsupported_height_is_rejected() {
    let spec = ProjectSpec::for_material(MaterialKind::Aluminum, 100.0, 8);
    let err = compute_fence_project(&spec).unwrap_err();
    assert_eq!(err.error_code(), "UNSUPPORTED_HEIGHT");
    assert!(matches!(err, FenceError::UnsupportedHeight { height_ft: 8, .. }));
}

#[test]
fn zero_post_spacing_is_invalid_input() {
    let mut spec = ProjectSpec::for_material(MaterialKind::Wood, 100.0, 6);
    spec.material = MaterialOptions::Wood(WoodOptions {
        post_spacing_ft: -8.0,
        ..WoodOptions::default()
    });
    let err = compute_fence_project(&spec).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn partial_json_spec_computes() {
    let spec: ProjectSpec = serde_json::from_str(
        r#"{ "length": 96, "material": { "type": "vinyl", "style": "picket" }, "corners": 1 }"#,
    )
    .unwrap();
    let t = compute_fence_project(&spec).unwrap();

    assert_eq!(spec.height_ft, 6);
    // 96 / 6 = 16 panels, 16 + 1 + 1 corner
    assert_eq!(t.bill_of_quantities.quantity(Item::Panels), 16);
    assert_eq!(t.bill_of_quantities.quantity(Item::Posts), 18);
}

#[test]
fn custom_price_tables() {
    let mut prices = PriceTables::default();
    prices.overhead = CostRange::ZERO;
    prices.labor.vinyl.standard = CostRange::new(10.0, 10.0);

    let spec = ProjectSpec::for_material(MaterialKind::Vinyl, 60.0, 6);
    let standard = compute_fence_project(&spec).unwrap().cost;
    let custom = compute_fence_project_with(&spec, &prices).unwrap().cost;

    assert_eq!(custom.overhead, CostRange::ZERO);
    assert_eq!(custom.labor, CostRange::new(600.0, 600.0));
    assert_eq!(custom.total_material, standard.total_material);
}
