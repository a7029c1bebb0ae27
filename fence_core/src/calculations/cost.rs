//! # Cost Estimator
//!
//! Prices a bill of quantities as low/high bands.
//!
//! Wood is priced per item (posts, rails, boards, screws). Vinyl, chain
//! link, aluminum and composite are priced per linear foot of fenceable
//! length, since their retail pricing is quoted that way. Concrete, gates
//! and permits are added on top for every material.
//!
//! ## Totals
//!
//! ```text
//! total_material = materials + concrete + gates + permits   (DIY)
//! labor          = fenceable_ft × labor $/ft
//! professional   = total_material + labor + overhead
//! diy_savings    = professional − total_material
//! ```
//!
//! With the waste buffer on, the waste factor scales the same lines the
//! bill of quantities buffers: per-foot material bands, wood rails, boards
//! and screws, and concrete. Wood posts stay at their exact count. Pricing
//! reads **raw** quantities so the buffer is applied exactly once.

use std::iter::Sum;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::concrete::{burial_depth_in, standard_post_length_ft};
use super::geometry::Topology;
use super::quantities::{BillOfQuantities, Item};
use crate::materials::{ChainLinkOptions, MaterialOptions, WoodOptions};
use crate::pricing::PriceTables;
use crate::project::ProjectSpec;

/// A low/high dollar band.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostRange {
    pub low: f64,
    pub high: f64,
}

impl CostRange {
    pub const ZERO: CostRange = CostRange { low: 0.0, high: 0.0 };

    pub const fn new(low: f64, high: f64) -> Self {
        CostRange { low, high }
    }

    /// Multiply both ends by a factor
    pub fn scale(self, factor: f64) -> Self {
        CostRange {
            low: self.low * factor,
            high: self.high * factor,
        }
    }

    /// Unit price band × quantity
    pub fn times(self, quantity: u64) -> Self {
        self.scale(quantity as f64)
    }

    /// Divide both ends, e.g. a total per foot of run
    pub fn per(self, divisor: f64) -> Self {
        CostRange {
            low: self.low / divisor,
            high: self.high / divisor,
        }
    }

    pub fn round_cents(self) -> Self {
        CostRange {
            low: round_cents(self.low),
            high: round_cents(self.high),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.low == 0.0 && self.high == 0.0
    }

    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

impl Add for CostRange {
    type Output = CostRange;
    fn add(self, rhs: CostRange) -> CostRange {
        CostRange::new(self.low + rhs.low, self.high + rhs.high)
    }
}

impl Sub for CostRange {
    type Output = CostRange;
    fn sub(self, rhs: CostRange) -> CostRange {
        CostRange::new(self.low - rhs.low, self.high - rhs.high)
    }
}

impl Sum for CostRange {
    fn sum<I: Iterator<Item = CostRange>>(iter: I) -> CostRange {
        iter.fold(CostRange::ZERO, Add::add)
    }
}

/// Round dollars to whole cents
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Materials,
    Concrete,
    Gates,
    Permits,
}

impl CostCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            CostCategory::Materials => "Materials",
            CostCategory::Concrete => "Concrete",
            CostCategory::Gates => "Gates",
            CostCategory::Permits => "Permits",
        }
    }
}

/// One priced line of the estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub category: CostCategory,
    pub label: String,
    pub range: CostRange,
}

/// Totals divided by run length
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerFootCost {
    pub material: CostRange,
    pub professional: CostRange,
}

/// Full cost estimate for a takeoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub lines: Vec<CostLine>,
    pub materials: CostRange,
    pub concrete: CostRange,
    pub gates: CostRange,
    pub permits: CostRange,
    /// Everything a DIY installer buys
    pub total_material: CostRange,
    pub labor: CostRange,
    pub overhead: CostRange,
    /// Contractor-installed total
    pub professional: CostRange,
    pub diy_savings: CostRange,
    pub per_foot: PerFootCost,
    pub waste_buffer_applied: bool,
}

impl CostEstimate {
    /// Sum of lines in one category
    pub fn category_total(&self, category: CostCategory) -> CostRange {
        category_sum(&self.lines, category)
    }
}

fn category_sum(lines: &[CostLine], category: CostCategory) -> CostRange {
    lines
        .iter()
        .filter(|line| line.category == category)
        .map(|line| line.range)
        .sum::<CostRange>()
        .round_cents()
}

struct LineBuilder {
    lines: Vec<CostLine>,
    waste_factor: f64,
}

impl LineBuilder {
    /// Add a priced band; materials and concrete take the waste factor
    fn push(&mut self, category: CostCategory, label: impl Into<String>, range: CostRange) {
        let factor = match category {
            CostCategory::Materials | CostCategory::Concrete => self.waste_factor,
            CostCategory::Gates | CostCategory::Permits => 1.0,
        };
        self.add(category, label, range.scale(factor));
    }

    /// Add a line priced from one counted item; only buffered items take the waste factor
    fn push_item(&mut self, category: CostCategory, item: Item, label: impl Into<String>, range: CostRange) {
        let factor = if item.is_buffered() { self.waste_factor } else { 1.0 };
        self.add(category, label, range.scale(factor));
    }

    /// Round to cents and append, skipping zero-dollar lines
    fn add(&mut self, category: CostCategory, label: impl Into<String>, range: CostRange) {
        let range = range.round_cents();
        if range.is_zero() {
            return;
        }
        self.lines.push(CostLine {
            category,
            label: label.into(),
            range,
        });
    }
}

/// Price a takeoff.
///
/// # Arguments
///
/// * `bom` - Bill of quantities; raw counts are priced
/// * `topology` - Resolved geometry (fenceable length, gate counts)
/// * `spec` - Sanitized project spec
/// * `prices` - Price tables to read from
pub fn estimate_cost(
    bom: &BillOfQuantities,
    topology: &Topology,
    spec: &ProjectSpec,
    prices: &PriceTables,
) -> CostEstimate {
    let waste_buffer_applied = spec.waste_buffer;
    let mut builder = LineBuilder {
        lines: Vec::new(),
        waste_factor: if waste_buffer_applied { prices.waste_factor } else { 1.0 },
    };

    match &spec.material {
        MaterialOptions::Wood(opts) => wood_lines(&mut builder, bom, opts, spec.height_ft, prices),
        MaterialOptions::ChainLink(opts) => chain_link_lines(&mut builder, opts, topology, prices),
        MaterialOptions::Vinyl(opts) => {
            panel_line(&mut builder, &spec.material, topology, prices.vinyl.per_foot(opts.style))
        }
        MaterialOptions::Aluminum(opts) => {
            panel_line(&mut builder, &spec.material, topology, prices.aluminum.per_foot(opts.style))
        }
        MaterialOptions::Composite(opts) => panel_line(
            &mut builder,
            &spec.material,
            topology,
            prices.composite.per_foot(opts.style, opts.tier),
        ),
    }

    let bags = bom.raw(Item::ConcreteBags);
    builder.push_item(
        CostCategory::Concrete,
        Item::ConcreteBags,
        format!("Concrete mix ({} × {} lb bags)", bags, spec.concrete.bag_size.pounds()),
        prices.concrete.per_bag(spec.concrete.bag_size).times(bags),
    );

    let gate_prices = prices.gates.get(spec.material.kind());
    builder.push(
        CostCategory::Gates,
        format!("Walk gates ({})", topology.walk_gates),
        gate_prices.walk.times(topology.walk_gates),
    );
    builder.push(
        CostCategory::Gates,
        format!("Drive gates ({})", topology.drive_gates),
        gate_prices.drive.times(topology.drive_gates),
    );

    if spec.include_permit && !topology.is_empty() {
        builder.push(CostCategory::Permits, "Fence permit", prices.permit);
    }

    let lines = builder.lines;
    let total_for = |category| category_sum(&lines, category);
    let materials = total_for(CostCategory::Materials);
    let concrete = total_for(CostCategory::Concrete);
    let gates = total_for(CostCategory::Gates);
    let permits = total_for(CostCategory::Permits);
    let total_material = (materials + concrete + gates + permits).round_cents();

    let labor = prices
        .labor_rate(spec.material.kind(), spec.height_ft)
        .scale(topology.fenceable_length_ft)
        .round_cents();
    let overhead = if topology.is_empty() {
        CostRange::ZERO
    } else {
        prices.overhead
    };
    let professional = (total_material + labor + overhead).round_cents();
    let diy_savings = (professional - total_material).round_cents();

    let per_foot = if topology.length_ft > 0.0 {
        PerFootCost {
            material: total_material.per(topology.length_ft).round_cents(),
            professional: professional.per(topology.length_ft).round_cents(),
        }
    } else {
        PerFootCost::default()
    };

    CostEstimate {
        lines,
        materials,
        concrete,
        gates,
        permits,
        total_material,
        labor,
        overhead,
        professional,
        diy_savings,
        per_foot,
        waste_buffer_applied,
    }
}

fn wood_lines(builder: &mut LineBuilder, bom: &BillOfQuantities, opts: &WoodOptions, height_ft: u32, prices: &PriceTables) {
    let species = prices.wood.species(opts.species);
    let (post_length_ft, _) = standard_post_length_ft(height_ft, burial_depth_in(height_ft));

    let posts = bom
        .items
        .iter()
        .filter(|line| line.item.is_post())
        .fold(0u64, |acc, line| acc.saturating_add(line.raw));
    let length_factor = f64::from(post_length_ft) / prices.wood.post_price_length_ft;
    builder.push_item(
        CostCategory::Materials,
        Item::Posts,
        format!("{} posts ({}, {} ft)", opts.species.display_name(), opts.post_size.display_name(), post_length_ft),
        species.post(opts.post_size).scale(length_factor).times(posts),
    );

    builder.push_item(
        CostCategory::Materials,
        Item::Rails,
        "Rails",
        species.rail.times(bom.raw(Item::Rails)),
    );

    if bom.contains(Item::Pickets) {
        let factor = if opts.style.is_open_style() {
            prices.wood.open_style_picket_factor
        } else {
            1.0
        };
        builder.push_item(
            CostCategory::Materials,
            Item::Pickets,
            format!("{} boards", opts.style.display_name()),
            species.picket.scale(factor).times(bom.raw(Item::Pickets)),
        );
    }

    if bom.contains(Item::ScrewBoxes) {
        builder.push_item(
            CostCategory::Materials,
            Item::ScrewBoxes,
            Item::ScrewBoxes.label(),
            prices.wood.screw_box.times(bom.raw(Item::ScrewBoxes)),
        );
    }
}

fn panel_line(builder: &mut LineBuilder, material: &MaterialOptions, topology: &Topology, per_foot: CostRange) {
    builder.push(
        CostCategory::Materials,
        format!("{} ({:.0} ft)", material.description(), topology.fenceable_length_ft),
        per_foot.scale(topology.fenceable_length_ft),
    );
}

fn chain_link_lines(builder: &mut LineBuilder, opts: &ChainLinkOptions, topology: &Topology, prices: &PriceTables) {
    let table = &prices.chain_link;
    let feet = topology.fenceable_length_ft;

    builder.push(
        CostCategory::Materials,
        format!(
            "{} {} chain link ({:.0} ft)",
            opts.coating.display_name(),
            opts.gauge.display_name(),
            feet
        ),
        table.per_foot(opts.coating, opts.gauge).scale(feet),
    );
    if opts.top_rail {
        builder.push(CostCategory::Materials, "Top rail", table.top_rail.scale(feet));
    }
    if opts.tension_wire {
        builder.push(CostCategory::Materials, "Tension wire", table.tension_wire.scale(feet));
    }
    if opts.privacy_slats {
        builder.push(CostCategory::Materials, "Privacy slats", table.privacy_slats.scale(feet));
    }
    if opts.barbed_wire {
        let strands = f64::from(opts.barbed_wire_strands);
        builder.push(
            CostCategory::Materials,
            format!("Barbed wire ({} strands)", opts.barbed_wire_strands),
            table.barbed_wire.scale(feet * strands),
        );
    }
}
