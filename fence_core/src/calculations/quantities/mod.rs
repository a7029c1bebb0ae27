//! # Bill of Quantities
//!
//! One pure generator per material system produces raw item counts from the
//! resolved topology. [`assemble`] then adds the items every system shares
//! (concrete, gate hardware) and applies the waste buffer.
//!
//! ## Waste Buffer
//!
//! When enabled, every physical-material item is inflated to
//! `ceil(raw × 1.10)`, saturating at `u64::MAX`. Posts and anything counted one-per-post or
//! one-per-gate are exact counts and are left alone.
//!
//! ## Example
//!
//! ```rust
//! use fence_core::calculations::quantities::{BillOfQuantities, Item};
//! use fence_core::materials::MaterialKind;
//!
//! let mut bom = BillOfQuantities::new(MaterialKind::Wood, true);
//! bom.push(Item::Pickets, 100);
//! bom.push(Item::LinePosts, 20);
//! assert_eq!(bom.quantity(Item::Pickets), 110);
//! assert_eq!(bom.quantity(Item::LinePosts), 20);
//! ```

pub mod chain_link;
pub mod panel;
pub mod wood;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::concrete::PostDepth;
use super::geometry::Topology;
use crate::materials::{MaterialKind, MaterialOptions};
use crate::project::ProjectSpec;

/// Waste buffer as a percentage over raw quantity
pub const WASTE_BUFFER_PERCENT: u64 = 10;

/// Items that can appear on a fence bill of quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    // Posts
    Posts,
    LinePosts,
    CornerPosts,
    EndPosts,
    GatePosts,
    TerminalPosts,
    // Framing and infill
    Rails,
    Pickets,
    Panels,
    FabricRolls,
    TopRail,
    TensionWire,
    PrivacySlats,
    BarbedWireRolls,
    // Hardware
    ScrewBoxes,
    Brackets,
    PostCaps,
    TerminalCaps,
    LoopCaps,
    TensionBars,
    TensionBands,
    BraceBands,
    TieWires,
    BarbedWireArms,
    // Shared
    ConcreteBags,
    GateHardwareKits,
}

/// Presentation grouping for line items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemGroup {
    Posts,
    Framing,
    Infill,
    Hardware,
    Concrete,
    Gates,
}

impl ItemGroup {
    /// Presentation order
    pub const ALL: [ItemGroup; 6] = [
        ItemGroup::Posts,
        ItemGroup::Framing,
        ItemGroup::Infill,
        ItemGroup::Hardware,
        ItemGroup::Concrete,
        ItemGroup::Gates,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ItemGroup::Posts => "Posts",
            ItemGroup::Framing => "Framing",
            ItemGroup::Infill => "Infill",
            ItemGroup::Hardware => "Hardware",
            ItemGroup::Concrete => "Concrete",
            ItemGroup::Gates => "Gates",
        }
    }
}

impl Item {
    pub fn label(&self) -> &'static str {
        match self {
            Item::Posts => "Posts",
            Item::LinePosts => "Line posts",
            Item::CornerPosts => "Corner posts",
            Item::EndPosts => "End posts",
            Item::GatePosts => "Gate posts",
            Item::TerminalPosts => "Terminal posts",
            Item::Rails => "Rails",
            Item::Pickets => "Pickets / boards",
            Item::Panels => "Panels",
            Item::FabricRolls => "Chain link fabric (50 ft rolls)",
            Item::TopRail => "Top rail (10'-6\" sections)",
            Item::TensionWire => "Bottom tension wire (100 ft coils)",
            Item::PrivacySlats => "Privacy slats",
            Item::BarbedWireRolls => "Barbed wire (1320 ft rolls)",
            Item::ScrewBoxes => "Exterior screws (100 ct boxes)",
            Item::Brackets => "Rail brackets",
            Item::PostCaps => "Post caps",
            Item::TerminalCaps => "Terminal post caps",
            Item::LoopCaps => "Line post loop caps",
            Item::TensionBars => "Tension bars",
            Item::TensionBands => "Tension bands",
            Item::BraceBands => "Brace bands",
            Item::TieWires => "Fabric tie wires",
            Item::BarbedWireArms => "Barbed wire arms",
            Item::ConcreteBags => "Concrete mix",
            Item::GateHardwareKits => "Gate hardware kits",
        }
    }

    /// Unit of sale
    pub fn unit(&self) -> &'static str {
        match self {
            Item::FabricRolls | Item::BarbedWireRolls => "rolls",
            Item::TopRail => "sections",
            Item::TensionWire => "coils",
            Item::PrivacySlats => "bundles",
            Item::ScrewBoxes => "boxes",
            Item::ConcreteBags => "bags",
            Item::GateHardwareKits => "kits",
            _ => "ea",
        }
    }

    pub fn group(&self) -> ItemGroup {
        match self {
            Item::Posts
            | Item::LinePosts
            | Item::CornerPosts
            | Item::EndPosts
            | Item::GatePosts
            | Item::TerminalPosts => ItemGroup::Posts,
            Item::Rails | Item::TopRail | Item::TensionWire => ItemGroup::Framing,
            Item::Pickets | Item::Panels | Item::FabricRolls | Item::PrivacySlats | Item::BarbedWireRolls => {
                ItemGroup::Infill
            }
            Item::ScrewBoxes
            | Item::Brackets
            | Item::PostCaps
            | Item::TerminalCaps
            | Item::LoopCaps
            | Item::TensionBars
            | Item::TensionBands
            | Item::BraceBands
            | Item::TieWires
            | Item::BarbedWireArms => ItemGroup::Hardware,
            Item::ConcreteBags => ItemGroup::Concrete,
            Item::GateHardwareKits => ItemGroup::Gates,
        }
    }

    pub fn is_post(&self) -> bool {
        self.group() == ItemGroup::Posts
    }

    /// Whether the waste buffer applies.
    ///
    /// Stock that gets cut, lost or mis-measured is buffered. Posts and
    /// hardware counted per post or per gate are exact.
    pub fn is_buffered(&self) -> bool {
        matches!(
            self,
            Item::Rails
                | Item::Pickets
                | Item::Panels
                | Item::FabricRolls
                | Item::TopRail
                | Item::TensionWire
                | Item::PrivacySlats
                | Item::BarbedWireRolls
                | Item::ScrewBoxes
                | Item::TieWires
                | Item::ConcreteBags
        )
    }
}

/// One line of the bill of quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item: Item,
    /// Count before the waste buffer
    pub raw: u64,
    /// Count to order
    pub quantity: u64,
}

/// Material-specific item counts for one takeoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillOfQuantities {
    pub material: MaterialKind,
    pub waste_buffer: bool,
    pub items: Vec<LineItem>,
}

impl BillOfQuantities {
    pub fn new(material: MaterialKind, waste_buffer: bool) -> Self {
        BillOfQuantities {
            material,
            waste_buffer,
            items: Vec::new(),
        }
    }

    /// Append an item, applying the waste buffer where it belongs.
    pub fn push(&mut self, item: Item, raw: u64) {
        let quantity = if self.waste_buffer && item.is_buffered() {
            with_waste_buffer(raw)
        } else {
            raw
        };
        self.items.push(LineItem { item, raw, quantity });
    }

    /// Quantity to order for an item, 0 when absent
    pub fn quantity(&self, item: Item) -> u64 {
        self.get(item).map_or(0, |line| line.quantity)
    }

    /// Pre-buffer quantity for an item, 0 when absent
    pub fn raw(&self, item: Item) -> u64 {
        self.get(item).map_or(0, |line| line.raw)
    }

    pub fn get(&self, item: Item) -> Option<&LineItem> {
        self.items.iter().find(|line| line.item == item)
    }

    pub fn contains(&self, item: Item) -> bool {
        self.get(item).is_some()
    }

    /// Sum of all post lines
    pub fn total_posts(&self) -> u64 {
        self.items
            .iter()
            .filter(|line| line.item.is_post())
            .fold(0, |acc, line| acc.saturating_add(line.quantity))
    }

    /// True when every quantity is zero
    pub fn is_empty(&self) -> bool {
        self.items.iter().all(|line| line.quantity == 0)
    }

    /// Item key → quantity, e.g. `{"pickets": 328, "rails": 57}`
    pub fn to_map(&self) -> BTreeMap<Item, u64> {
        self.items.iter().map(|line| (line.item, line.quantity)).collect()
    }
}

/// `ceil(raw × 1.10)` in integer arithmetic
pub fn with_waste_buffer(raw: u64) -> u64 {
    let buffered = (u128::from(raw) * u128::from(100 + WASTE_BUFFER_PERCENT)).div_ceil(100);
    u64::try_from(buffered).unwrap_or(u64::MAX)
}

/// Raw counts for the chosen material, dispatched on the material variant.
pub fn material_items(spec: &ProjectSpec, topology: &Topology) -> Vec<(Item, u64)> {
    match &spec.material {
        MaterialOptions::Wood(opts) => wood::quantities(opts, spec.height_ft, topology),
        MaterialOptions::Vinyl(opts) => panel::vinyl_quantities(opts, topology),
        MaterialOptions::ChainLink(opts) => chain_link::quantities(opts, spec.height_ft, topology),
        MaterialOptions::Aluminum(opts) => panel::aluminum_quantities(opts, topology),
        MaterialOptions::Composite(opts) => panel::composite_quantities(opts, topology),
    }
}

/// Total posts across raw post lines
pub fn post_count(items: &[(Item, u64)]) -> u64 {
    items
        .iter()
        .filter(|(item, _)| item.is_post())
        .fold(0, |acc, (_, count)| acc.saturating_add(*count))
}

/// Build the final bill: material items, concrete, gate hardware, buffered.
pub fn assemble(
    spec: &ProjectSpec,
    topology: &Topology,
    items: Vec<(Item, u64)>,
    post_depth: &PostDepth,
) -> BillOfQuantities {
    let mut bom = BillOfQuantities::new(spec.material.kind(), spec.waste_buffer);
    for (item, raw) in items {
        bom.push(item, raw);
    }
    if spec.concrete.enabled {
        bom.push(Item::ConcreteBags, post_depth.total_bags);
    }
    if topology.gate_count() > 0 {
        bom.push(Item::GateHardwareKits, topology.gate_count());
    }
    bom
}
