//! Aluminum Fence Options
//!
//! Ornamental aluminum ships as welded panels between square posts.

use serde::{Deserialize, Serialize};

/// Heights (ft) aluminum panels are stocked in
pub const ALLOWED_HEIGHTS: [u32; 4] = [3, 4, 5, 6];

/// Standard aluminum panel width (ft)
pub const DEFAULT_PANEL_WIDTH_FT: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AluminumStyle {
    #[default]
    FlatTop,
    SpearTop,
    PuppyPicket,
}

impl AluminumStyle {
    pub const ALL: [AluminumStyle; 3] = [
        AluminumStyle::FlatTop,
        AluminumStyle::SpearTop,
        AluminumStyle::PuppyPicket,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            AluminumStyle::FlatTop => "Flat Top",
            AluminumStyle::SpearTop => "Spear Top",
            AluminumStyle::PuppyPicket => "Puppy Picket",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AluminumOptions {
    pub style: AluminumStyle,
    pub panel_width_ft: f64,
}

impl Default for AluminumOptions {
    fn default() -> Self {
        AluminumOptions {
            style: AluminumStyle::FlatTop,
            panel_width_ft: DEFAULT_PANEL_WIDTH_FT,
        }
    }
}
