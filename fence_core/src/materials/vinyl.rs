//! Vinyl Fence Options
//!
//! Vinyl (PVC) fences ship as prefabricated panels that slot into routed
//! posts, so post spacing is the panel width.

use serde::{Deserialize, Serialize};

/// Heights (ft) vinyl panels are stocked in
pub const ALLOWED_HEIGHTS: [u32; 5] = [3, 4, 5, 6, 8];

/// Most common vinyl panel width (ft)
pub const DEFAULT_PANEL_WIDTH_FT: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VinylStyle {
    #[default]
    Privacy,
    SemiPrivacy,
    Picket,
    RanchRail,
}

impl VinylStyle {
    pub const ALL: [VinylStyle; 4] = [
        VinylStyle::Privacy,
        VinylStyle::SemiPrivacy,
        VinylStyle::Picket,
        VinylStyle::RanchRail,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            VinylStyle::Privacy => "Privacy",
            VinylStyle::SemiPrivacy => "Semi-Privacy",
            VinylStyle::Picket => "Picket",
            VinylStyle::RanchRail => "Ranch Rail",
        }
    }
}

/// Vinyl fence sub-options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VinylOptions {
    pub style: VinylStyle,
    /// Panel width (ft), typically 6 or 8
    pub panel_width_ft: f64,
    /// Include a cap for every post
    pub post_caps: bool,
}

impl Default for VinylOptions {
    fn default() -> Self {
        VinylOptions {
            style: VinylStyle::Privacy,
            panel_width_ft: DEFAULT_PANEL_WIDTH_FT,
            post_caps: true,
        }
    }
}
