//! Chain Link Fence Options
//!
//! Woven steel fabric stretched between terminal posts (corners, ends,
//! gates) and tied to line posts. Optional top rail, bottom tension wire,
//! privacy slats woven into the mesh, and barbed wire on extension arms.

use serde::{Deserialize, Serialize};

/// Heights (ft) chain link fabric is woven in
pub const ALLOWED_HEIGHTS: [u32; 8] = [3, 4, 5, 6, 7, 8, 10, 12];

/// Maximum recommended line post spacing (ft)
pub const DEFAULT_POST_SPACING_FT: f64 = 10.0;

/// Fabric is sold in 50 ft rolls
pub const FABRIC_ROLL_FT: f64 = 50.0;

/// Top rail is sold in 10'-6" swaged sections
pub const TOP_RAIL_SECTION_FT: f64 = 10.5;

/// Bottom tension wire coil length (ft)
pub const TENSION_WIRE_COIL_FT: f64 = 100.0;

/// Barbed wire roll length (ft), a standard quarter-mile spool
pub const BARBED_WIRE_ROLL_FT: f64 = 1320.0;

/// Wire gauge of the fabric. Lower numbers are heavier wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gauge {
    #[serde(rename = "9")]
    Nine,
    #[default]
    #[serde(rename = "11")]
    Eleven,
    #[serde(rename = "11.5")]
    ElevenAndHalf,
}

impl Gauge {
    pub const ALL: [Gauge; 3] = [Gauge::Nine, Gauge::Eleven, Gauge::ElevenAndHalf];

    pub fn display_name(&self) -> &'static str {
        match self {
            Gauge::Nine => "9 ga",
            Gauge::Eleven => "11 ga",
            Gauge::ElevenAndHalf => "11.5 ga",
        }
    }
}

/// Diamond mesh opening size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mesh {
    #[serde(rename = "2in")]
    TwoInch,
    #[default]
    #[serde(rename = "2-3/8in")]
    TwoAndThreeEighths,
}

impl Mesh {
    /// Fence face area one bundle of privacy slats covers (sq ft).
    /// Tighter mesh takes more slats per square foot.
    pub fn slat_bundle_coverage_sqft(&self) -> f64 {
        match self {
            Mesh::TwoInch => 50.0,
            Mesh::TwoAndThreeEighths => 60.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Mesh::TwoInch => "2\"",
            Mesh::TwoAndThreeEighths => "2-3/8\"",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coating {
    #[default]
    Galvanized,
    BlackVinyl,
    GreenVinyl,
}

impl Coating {
    pub const ALL: [Coating; 3] = [Coating::Galvanized, Coating::BlackVinyl, Coating::GreenVinyl];

    pub fn display_name(&self) -> &'static str {
        match self {
            Coating::Galvanized => "Galvanized",
            Coating::BlackVinyl => "Black Vinyl-Coated",
            Coating::GreenVinyl => "Green Vinyl-Coated",
        }
    }
}

/// Chain link sub-options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainLinkOptions {
    pub gauge: Gauge,
    pub mesh: Mesh,
    pub coating: Coating,
    /// Line post spacing (ft)
    pub post_spacing_ft: f64,
    pub top_rail: bool,
    /// Bottom tension wire
    pub tension_wire: bool,
    pub privacy_slats: bool,
    pub barbed_wire: bool,
    /// Strands of barbed wire on each arm (1-3)
    pub barbed_wire_strands: u32,
}

impl Default for ChainLinkOptions {
    fn default() -> Self {
        ChainLinkOptions {
            gauge: Gauge::Eleven,
            mesh: Mesh::TwoAndThreeEighths,
            coating: Coating::Galvanized,
            post_spacing_ft: DEFAULT_POST_SPACING_FT,
            top_rail: true,
            tension_wire: false,
            privacy_slats: false,
            barbed_wire: false,
            barbed_wire_strands: 3,
        }
    }
}
