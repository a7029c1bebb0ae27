//! # Fence Material Systems
//!
//! The five material systems the takeoff engine knows how to quantify.
//! Each has its own option set, its own stocked heights, and its own rule
//! for how far apart posts land.
//!
//! ## JSON Serialization
//!
//! Material options serialize as a tagged union with a `"type"`
//! discriminator next to the sub-options:
//!
//! ```json
//! { "type": "wood", "style": "privacy", "species": "cedar" }
//! { "type": "vinyl", "panel_width_ft": 8.0 }
//! { "type": "chainlink", "gauge": "9", "privacy_slats": true }
//! { "type": "aluminum", "style": "spear_top" }
//! { "type": "composite", "tier": "premium" }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fence_core::materials::{MaterialKind, MaterialOptions, VinylOptions};
//!
//! let vinyl = MaterialOptions::Vinyl(VinylOptions::default());
//! assert_eq!(vinyl.kind(), MaterialKind::Vinyl);
//! assert_eq!(vinyl.spacing_ft(), 6.0);
//! assert!(vinyl.allowed_heights().contains(&6));
//! ```

pub mod aluminum;
pub mod chain_link;
pub mod composite;
pub mod vinyl;
pub mod wood;

pub use aluminum::{AluminumOptions, AluminumStyle};
pub use chain_link::{ChainLinkOptions, Coating, Gauge, Mesh};
pub use composite::{CompositeOptions, CompositeStyle, CompositeTier};
pub use vinyl::{VinylOptions, VinylStyle};
pub use wood::{PostSize, WoodOptions, WoodSpecies, WoodStyle};

use serde::{Deserialize, Serialize};

/// Material system discriminator, used as a price-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Wood,
    Vinyl,
    ChainLink,
    Aluminum,
    Composite,
}

impl MaterialKind {
    /// All material systems for UI selection
    pub const ALL: [MaterialKind; 5] = [
        MaterialKind::Wood,
        MaterialKind::Vinyl,
        MaterialKind::ChainLink,
        MaterialKind::Aluminum,
        MaterialKind::Composite,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialKind::Wood => "Wood",
            MaterialKind::Vinyl => "Vinyl",
            MaterialKind::ChainLink => "Chain Link",
            MaterialKind::Aluminum => "Aluminum",
            MaterialKind::Composite => "Composite",
        }
    }

    /// Default options for this material system
    pub fn default_options(&self) -> MaterialOptions {
        match self {
            MaterialKind::Wood => MaterialOptions::Wood(WoodOptions::default()),
            MaterialKind::Vinyl => MaterialOptions::Vinyl(VinylOptions::default()),
            MaterialKind::ChainLink => MaterialOptions::ChainLink(ChainLinkOptions::default()),
            MaterialKind::Aluminum => MaterialOptions::Aluminum(AluminumOptions::default()),
            MaterialKind::Composite => MaterialOptions::Composite(CompositeOptions::default()),
        }
    }
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Post cross-section class for concrete sizing.
///
/// Only wood 6x6 posts fall in the heavy class; every other post sold for
/// these systems (4x4 wood, 5x5 vinyl, steel pipe, aluminum, composite
/// sleeves) sets like a 4-inch post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostSection {
    FourInchClass,
    SixBySix,
}

/// Material choice with material-specific sub-options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialOptions {
    Wood(WoodOptions),
    Vinyl(VinylOptions),
    ChainLink(ChainLinkOptions),
    Aluminum(AluminumOptions),
    Composite(CompositeOptions),
}

impl Default for MaterialOptions {
    fn default() -> Self {
        MaterialOptions::Wood(WoodOptions::default())
    }
}

impl MaterialOptions {
    pub fn kind(&self) -> MaterialKind {
        match self {
            MaterialOptions::Wood(_) => MaterialKind::Wood,
            MaterialOptions::Vinyl(_) => MaterialKind::Vinyl,
            MaterialOptions::ChainLink(_) => MaterialKind::ChainLink,
            MaterialOptions::Aluminum(_) => MaterialKind::Aluminum,
            MaterialOptions::Composite(_) => MaterialKind::Composite,
        }
    }

    /// Heights (ft) this material is sold in
    pub fn allowed_heights(&self) -> &'static [u32] {
        match self {
            MaterialOptions::Wood(_) => &wood::ALLOWED_HEIGHTS,
            MaterialOptions::Vinyl(_) => &vinyl::ALLOWED_HEIGHTS,
            MaterialOptions::ChainLink(_) => &chain_link::ALLOWED_HEIGHTS,
            MaterialOptions::Aluminum(_) => &aluminum::ALLOWED_HEIGHTS,
            MaterialOptions::Composite(_) => &composite::ALLOWED_HEIGHTS,
        }
    }

    /// Distance between post centers (ft).
    ///
    /// Panel systems are spaced by their panel width; stick-built systems
    /// by the configured post spacing.
    pub fn spacing_ft(&self) -> f64 {
        match self {
            MaterialOptions::Wood(o) => o.post_spacing_ft,
            MaterialOptions::Vinyl(o) => o.panel_width_ft,
            MaterialOptions::ChainLink(o) => o.post_spacing_ft,
            MaterialOptions::Aluminum(o) => o.panel_width_ft,
            MaterialOptions::Composite(_) => composite::SECTION_WIDTH_FT,
        }
    }

    pub fn post_section(&self) -> PostSection {
        match self {
            MaterialOptions::Wood(o) if o.post_size == PostSize::SixBySix => PostSection::SixBySix,
            _ => PostSection::FourInchClass,
        }
    }

    /// Style/variant description, e.g. "Cedar Privacy"
    pub fn description(&self) -> String {
        match self {
            MaterialOptions::Wood(o) => {
                format!("{} {} ({} posts)", o.species.display_name(), o.style.display_name(), o.post_size.display_name())
            }
            MaterialOptions::Vinyl(o) => format!("Vinyl {}", o.style.display_name()),
            MaterialOptions::ChainLink(o) => format!(
                "{} {} Chain Link, {} mesh",
                o.coating.display_name(),
                o.gauge.display_name(),
                o.mesh.display_name()
            ),
            MaterialOptions::Aluminum(o) => format!("Aluminum {}", o.style.display_name()),
            MaterialOptions::Composite(o) => {
                format!("{} Composite {}", o.tier.display_name(), o.style.display_name())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_per_material() {
        assert_eq!(MaterialKind::Wood.default_options().spacing_ft(), 8.0);
        assert_eq!(MaterialKind::Vinyl.default_options().spacing_ft(), 6.0);
        assert_eq!(MaterialKind::ChainLink.default_options().spacing_ft(), 10.0);
        assert_eq!(MaterialKind::Aluminum.default_options().spacing_ft(), 6.0);
        assert_eq!(MaterialKind::Composite.default_options().spacing_ft(), 6.0);
    }

    #[test]
    fn test_post_section() {
        let mut wood = WoodOptions::default();
        assert_eq!(MaterialOptions::Wood(wood.clone()).post_section(), PostSection::FourInchClass);
        wood.post_size = PostSize::SixBySix;
        assert_eq!(MaterialOptions::Wood(wood).post_section(), PostSection::SixBySix);
        assert_eq!(
            MaterialKind::ChainLink.default_options().post_section(),
            PostSection::FourInchClass
        );
    }

    #[test]
    fn test_tagged_serialization() {
        let opts = MaterialOptions::ChainLink(ChainLinkOptions::default());
        let json = serde_json::to_string(&opts).unwrap();
        assert!(json.contains("\"type\":\"chainlink\""));
        assert!(json.contains("\"gauge\":\"11\""));

        let parsed: MaterialOptions = serde_json::from_str(r#"{"type":"composite","tier":"premium"}"#).unwrap();
        match parsed {
            MaterialOptions::Composite(c) => assert_eq!(c.tier, CompositeTier::Premium),
            other => panic!("expected composite, got {:?}", other),
        }
    }
}
