//! Wood Fence Options
//!
//! Stick-built wood fences: posts set in the ground, horizontal rails
//! between posts, and vertical boards (pickets) fastened to the rails.
//! Split-rail fences have posts and rails only.

use serde::{Deserialize, Serialize};

/// Heights (ft) wood fences are quoted in
pub const ALLOWED_HEIGHTS: [u32; 6] = [3, 4, 5, 6, 7, 8];

/// Typical on-center post spacing for wood fences (ft)
pub const DEFAULT_POST_SPACING_FT: f64 = 8.0;

/// Actual face width of a nominal 1x6 fence board (in)
pub const DEFAULT_BOARD_WIDTH_IN: f64 = 5.5;

/// Board layout style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WoodStyle {
    /// Boards butted edge to edge
    #[default]
    Privacy,
    /// Spaced pickets, usually 3-4 ft tall
    Picket,
    /// Overlapping boards on alternating faces
    BoardOnBoard,
    /// Posts and rails only
    SplitRail,
}

impl WoodStyle {
    /// All styles for UI selection
    pub const ALL: [WoodStyle; 4] = [
        WoodStyle::Privacy,
        WoodStyle::Picket,
        WoodStyle::BoardOnBoard,
        WoodStyle::SplitRail,
    ];

    /// Whether this style carries vertical boards at all
    pub fn has_boards(&self) -> bool {
        !matches!(self, WoodStyle::SplitRail)
    }

    /// Picket and split-rail fences use less board stock per foot than privacy
    pub fn is_open_style(&self) -> bool {
        matches!(self, WoodStyle::Picket | WoodStyle::SplitRail)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WoodStyle::Privacy => "Privacy",
            WoodStyle::Picket => "Picket",
            WoodStyle::BoardOnBoard => "Board-on-Board",
            WoodStyle::SplitRail => "Split Rail",
        }
    }
}

/// Lumber species, which drives unit pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WoodSpecies {
    /// Pressure-treated pine
    #[default]
    PressureTreated,
    /// Western red cedar
    Cedar,
    /// Redwood
    Redwood,
}

impl WoodSpecies {
    /// All species for UI selection
    pub const ALL: [WoodSpecies; 3] = [
        WoodSpecies::PressureTreated,
        WoodSpecies::Cedar,
        WoodSpecies::Redwood,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            WoodSpecies::PressureTreated => "Pressure-Treated Pine",
            WoodSpecies::Cedar => "Cedar",
            WoodSpecies::Redwood => "Redwood",
        }
    }
}

/// Nominal post size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PostSize {
    /// 4x4 (3.5" x 3.5")
    #[default]
    #[serde(rename = "4x4")]
    FourByFour,
    /// 6x6 (5.5" x 5.5")
    #[serde(rename = "6x6")]
    SixBySix,
}

impl PostSize {
    pub fn display_name(&self) -> &'static str {
        match self {
            PostSize::FourByFour => "4x4",
            PostSize::SixBySix => "6x6",
        }
    }
}

/// Wood fence sub-options.
///
/// ## JSON Example
///
/// ```json
/// {
///   "style": "privacy",
///   "species": "cedar",
///   "post_spacing_ft": 8.0,
///   "post_size": "4x4",
///   "board_width_in": 5.5,
///   "board_spacing_in": 0.0,
///   "rail_count": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WoodOptions {
    pub style: WoodStyle,
    pub species: WoodSpecies,
    /// On-center post spacing (ft)
    pub post_spacing_ft: f64,
    pub post_size: PostSize,
    /// Actual board face width (in)
    pub board_width_in: f64,
    /// Gap between boards (in), 0 for privacy
    pub board_spacing_in: f64,
    /// Rails per section. `None` derives the count from fence height.
    pub rail_count: Option<u32>,
}

impl Default for WoodOptions {
    fn default() -> Self {
        WoodOptions {
            style: WoodStyle::Privacy,
            species: WoodSpecies::PressureTreated,
            post_spacing_ft: DEFAULT_POST_SPACING_FT,
            post_size: PostSize::FourByFour,
            board_width_in: DEFAULT_BOARD_WIDTH_IN,
            board_spacing_in: 0.0,
            rail_count: None,
        }
    }
}

impl WoodOptions {
    /// Rails per section: the explicit override when present, otherwise
    /// derived from height.
    pub fn rail_count(&self, height_ft: u32) -> u32 {
        self.rail_count.unwrap_or_else(|| default_rail_count(height_ft))
    }

    /// Board width plus gap: the horizontal distance each board covers (in)
    pub fn board_module_in(&self) -> f64 {
        self.board_width_in + self.board_spacing_in
    }
}

/// Rails needed to keep boards flat at a given height:
/// up to 4 ft → 2, up to 7 ft → 3, taller → 4.
pub fn default_rail_count(height_ft: u32) -> u32 {
    match height_ft {
        0..=4 => 2,
        5..=7 => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rail_count_bands() {
        assert_eq!(default_rail_count(3), 2);
        assert_eq!(default_rail_count(4), 2);
        assert_eq!(default_rail_count(5), 3);
        assert_eq!(default_rail_count(7), 3);
        assert_eq!(default_rail_count(8), 4);
    }

    #[test]
    fn test_rail_override_wins() {
        let mut opts = WoodOptions::default();
        assert_eq!(opts.rail_count(6), 3);
        opts.rail_count = Some(2);
        assert_eq!(opts.rail_count(6), 2);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let opts: WoodOptions = serde_json::from_str(r#"{"species":"redwood","post_size":"6x6"}"#).unwrap();
        assert_eq!(opts.species, WoodSpecies::Redwood);
        assert_eq!(opts.post_size, PostSize::SixBySix);
        assert_eq!(opts.post_spacing_ft, DEFAULT_POST_SPACING_FT);
        assert_eq!(opts.style, WoodStyle::Privacy);
    }

    #[test]
    fn test_open_styles() {
        assert!(WoodStyle::Picket.is_open_style());
        assert!(WoodStyle::SplitRail.is_open_style());
        assert!(!WoodStyle::BoardOnBoard.is_open_style());
        assert!(!WoodStyle::SplitRail.has_boards());
    }
}
