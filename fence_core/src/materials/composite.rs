//! Composite Fence Options
//!
//! Wood-plastic composite boards slid into post channels. Sections are a
//! fixed 6 ft wide.

use serde::{Deserialize, Serialize};

/// Heights (ft) composite kits are stocked in
pub const ALLOWED_HEIGHTS: [u32; 4] = [4, 5, 6, 8];

/// Composite section width (ft)
pub const SECTION_WIDTH_FT: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeStyle {
    #[default]
    Privacy,
    Horizontal,
    LatticeTop,
}

impl CompositeStyle {
    pub const ALL: [CompositeStyle; 3] = [
        CompositeStyle::Privacy,
        CompositeStyle::Horizontal,
        CompositeStyle::LatticeTop,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CompositeStyle::Privacy => "Privacy",
            CompositeStyle::Horizontal => "Horizontal Slat",
            CompositeStyle::LatticeTop => "Lattice Top",
        }
    }
}

/// Product line tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeTier {
    #[default]
    Standard,
    Premium,
}

impl CompositeTier {
    pub fn display_name(&self) -> &'static str {
        match self {
            CompositeTier::Standard => "Standard",
            CompositeTier::Premium => "Premium",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeOptions {
    pub style: CompositeStyle,
    pub tier: CompositeTier,
}
