//! # Price Tables
//!
//! Unit and per-foot price bands the cost estimator reads from. Tables are
//! plain values passed into [`estimate_cost`]; nothing in the estimator
//! reaches for global prices, so tests and callers can substitute their own.
//!
//! Figures are national-average retail ranges in USD, suitable for a
//! ballpark estimate only. They are not a pricing feed.
//!
//! ## Example
//!
//! ```rust
//! use fence_core::calculations::CostRange;
//! use fence_core::pricing::PriceTables;
//!
//! let mut prices = PriceTables::default();
//! prices.permit = CostRange::new(0.0, 0.0);
//!
//! let standard = PriceTables::standard();
//! assert!(standard.permit.high > 0.0);
//! ```
//!
//! [`estimate_cost`]: crate::calculations::cost::estimate_cost

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::cost::CostRange;
use crate::errors::FenceResult;
use crate::materials::{
    AluminumStyle, Coating, CompositeStyle, CompositeTier, Gauge, MaterialKind, PostSize, VinylStyle, WoodSpecies,
};
use crate::project::BagSize;

static STANDARD_PRICES: Lazy<PriceTables> = Lazy::new(PriceTables::default);

/// One value per material system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ByMaterial<T> {
    pub wood: T,
    pub vinyl: T,
    pub chain_link: T,
    pub aluminum: T,
    pub composite: T,
}

impl<T> ByMaterial<T> {
    pub fn get(&self, kind: MaterialKind) -> &T {
        match kind {
            MaterialKind::Wood => &self.wood,
            MaterialKind::Vinyl => &self.vinyl,
            MaterialKind::ChainLink => &self.chain_link,
            MaterialKind::Aluminum => &self.aluminum,
            MaterialKind::Composite => &self.composite,
        }
    }
}

/// All price tables used by the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTables {
    pub wood: WoodPrices,
    pub vinyl: VinylPrices,
    pub chain_link: ChainLinkPrices,
    pub aluminum: AluminumPrices,
    pub composite: CompositePrices,
    pub gates: ByMaterial<GatePrices>,
    pub labor: ByMaterial<LaborRates>,
    pub concrete: ConcretePrices,
    /// Flat permit fee band
    pub permit: CostRange,
    /// Fixed contractor overhead added to professional installs
    pub overhead: CostRange,
    /// Multiplier applied to physical-material costs with the waste buffer on
    pub waste_factor: f64,
    /// Heights at or above this use the complex labor band (ft)
    pub complex_height_ft: u32,
}

impl PriceTables {
    /// Shared standard tables, built once
    pub fn standard() -> &'static PriceTables {
        &STANDARD_PRICES
    }

    /// Load tables from JSON (e.g., a regional override file)
    pub fn from_json(json: &str) -> FenceResult<PriceTables> {
        Ok(serde_json::from_str(json)?)
    }

    /// Labor $/ft band for a material at a given height
    pub fn labor_rate(&self, kind: MaterialKind, height_ft: u32) -> CostRange {
        let rates = self.labor.get(kind);
        if height_ft >= self.complex_height_ft {
            rates.complex
        } else {
            rates.standard
        }
    }
}

impl Default for PriceTables {
    fn default() -> Self {
        PriceTables {
            wood: WoodPrices::default(),
            vinyl: VinylPrices::default(),
            chain_link: ChainLinkPrices::default(),
            aluminum: AluminumPrices::default(),
            composite: CompositePrices::default(),
            gates: ByMaterial {
                wood: GatePrices::new((150.0, 350.0), (350.0, 800.0)),
                vinyl: GatePrices::new((250.0, 500.0), (600.0, 1200.0)),
                chain_link: GatePrices::new((100.0, 250.0), (250.0, 600.0)),
                aluminum: GatePrices::new((300.0, 600.0), (700.0, 1500.0)),
                composite: GatePrices::new((350.0, 700.0), (800.0, 1600.0)),
            },
            labor: ByMaterial {
                wood: LaborRates::new((10.0, 20.0), (14.0, 28.0)),
                vinyl: LaborRates::new((12.0, 22.0), (16.0, 30.0)),
                chain_link: LaborRates::new((8.0, 15.0), (11.0, 20.0)),
                aluminum: LaborRates::new((12.0, 25.0), (16.0, 32.0)),
                composite: LaborRates::new((15.0, 28.0), (20.0, 36.0)),
            },
            concrete: ConcretePrices::default(),
            permit: CostRange::new(50.0, 300.0),
            overhead: CostRange::new(50.0, 200.0),
            waste_factor: 1.10,
            complex_height_ft: 8,
        }
    }
}

// ============================================================================
// Wood
// ============================================================================

/// Unit prices for one wood species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesPrices {
    /// 8 ft 4x4 post
    pub post_4x4: CostRange,
    /// 8 ft 6x6 post
    pub post_6x6: CostRange,
    /// 2x4x8 rail
    pub rail: CostRange,
    /// One fence board
    pub picket: CostRange,
}

impl SpeciesPrices {
    pub fn post(&self, size: PostSize) -> CostRange {
        match size {
            PostSize::FourByFour => self.post_4x4,
            PostSize::SixBySix => self.post_6x6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WoodPrices {
    pub pressure_treated: SpeciesPrices,
    pub cedar: SpeciesPrices,
    pub redwood: SpeciesPrices,
    /// Box of 100 exterior screws
    pub screw_box: CostRange,
    /// Post prices are quoted for this length; other stocked lengths scale linearly (ft)
    pub post_price_length_ft: f64,
    /// Picket cost multiplier for picket and split-rail styles
    pub open_style_picket_factor: f64,
}

impl WoodPrices {
    pub fn species(&self, species: WoodSpecies) -> &SpeciesPrices {
        match species {
            WoodSpecies::PressureTreated => &self.pressure_treated,
            WoodSpecies::Cedar => &self.cedar,
            WoodSpecies::Redwood => &self.redwood,
        }
    }
}

impl Default for WoodPrices {
    fn default() -> Self {
        WoodPrices {
            pressure_treated: SpeciesPrices {
                post_4x4: CostRange::new(12.0, 18.0),
                post_6x6: CostRange::new(28.0, 42.0),
                rail: CostRange::new(6.0, 9.0),
                picket: CostRange::new(2.5, 4.0),
            },
            cedar: SpeciesPrices {
                post_4x4: CostRange::new(20.0, 30.0),
                post_6x6: CostRange::new(45.0, 65.0),
                rail: CostRange::new(10.0, 15.0),
                picket: CostRange::new(4.0, 6.5),
            },
            redwood: SpeciesPrices {
                post_4x4: CostRange::new(25.0, 38.0),
                post_6x6: CostRange::new(55.0, 80.0),
                rail: CostRange::new(12.0, 18.0),
                picket: CostRange::new(5.0, 8.0),
            },
            screw_box: CostRange::new(12.0, 20.0),
            post_price_length_ft: 8.0,
            open_style_picket_factor: 0.65,
        }
    }
}

// ============================================================================
// Per-foot systems
// ============================================================================

/// Installed-material $/ft by vinyl style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VinylPrices {
    pub privacy: CostRange,
    pub semi_privacy: CostRange,
    pub picket: CostRange,
    pub ranch_rail: CostRange,
}

impl VinylPrices {
    pub fn per_foot(&self, style: VinylStyle) -> CostRange {
        match style {
            VinylStyle::Privacy => self.privacy,
            VinylStyle::SemiPrivacy => self.semi_privacy,
            VinylStyle::Picket => self.picket,
            VinylStyle::RanchRail => self.ranch_rail,
        }
    }
}

impl Default for VinylPrices {
    fn default() -> Self {
        VinylPrices {
            privacy: CostRange::new(20.0, 35.0),
            semi_privacy: CostRange::new(18.0, 32.0),
            picket: CostRange::new(14.0, 25.0),
            ranch_rail: CostRange::new(8.0, 15.0),
        }
    }
}

/// Chain link $/ft: fabric, posts and fittings by coating, scaled by gauge,
/// plus per-foot add-ons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLinkPrices {
    pub galvanized: CostRange,
    pub black_vinyl: CostRange,
    pub green_vinyl: CostRange,
    pub gauge_9_factor: f64,
    pub gauge_11_factor: f64,
    pub gauge_11_5_factor: f64,
    pub top_rail: CostRange,
    pub tension_wire: CostRange,
    pub privacy_slats: CostRange,
    /// Per strand
    pub barbed_wire: CostRange,
}

impl ChainLinkPrices {
    pub fn per_foot(&self, coating: Coating, gauge: Gauge) -> CostRange {
        let base = match coating {
            Coating::Galvanized => self.galvanized,
            Coating::BlackVinyl => self.black_vinyl,
            Coating::GreenVinyl => self.green_vinyl,
        };
        let factor = match gauge {
            Gauge::Nine => self.gauge_9_factor,
            Gauge::Eleven => self.gauge_11_factor,
            Gauge::ElevenAndHalf => self.gauge_11_5_factor,
        };
        base.scale(factor)
    }
}

impl Default for ChainLinkPrices {
    fn default() -> Self {
        ChainLinkPrices {
            galvanized: CostRange::new(8.0, 15.0),
            black_vinyl: CostRange::new(11.0, 20.0),
            green_vinyl: CostRange::new(11.0, 20.0),
            gauge_9_factor: 1.25,
            gauge_11_factor: 1.0,
            gauge_11_5_factor: 0.9,
            top_rail: CostRange::new(1.5, 3.0),
            tension_wire: CostRange::new(0.25, 0.5),
            privacy_slats: CostRange::new(3.0, 6.0),
            barbed_wire: CostRange::new(0.3, 0.6),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AluminumPrices {
    pub flat_top: CostRange,
    pub spear_top: CostRange,
    pub puppy_picket: CostRange,
}

impl AluminumPrices {
    pub fn per_foot(&self, style: AluminumStyle) -> CostRange {
        match style {
            AluminumStyle::FlatTop => self.flat_top,
            AluminumStyle::SpearTop => self.spear_top,
            AluminumStyle::PuppyPicket => self.puppy_picket,
        }
    }
}

impl Default for AluminumPrices {
    fn default() -> Self {
        AluminumPrices {
            flat_top: CostRange::new(22.0, 38.0),
            spear_top: CostRange::new(25.0, 42.0),
            puppy_picket: CostRange::new(30.0, 50.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositePrices {
    pub privacy: CostRange,
    pub horizontal: CostRange,
    pub lattice_top: CostRange,
    pub premium_factor: f64,
}

impl CompositePrices {
    pub fn per_foot(&self, style: CompositeStyle, tier: CompositeTier) -> CostRange {
        let base = match style {
            CompositeStyle::Privacy => self.privacy,
            CompositeStyle::Horizontal => self.horizontal,
            CompositeStyle::LatticeTop => self.lattice_top,
        };
        match tier {
            CompositeTier::Standard => base,
            CompositeTier::Premium => base.scale(self.premium_factor),
        }
    }
}

impl Default for CompositePrices {
    fn default() -> Self {
        CompositePrices {
            privacy: CostRange::new(30.0, 50.0),
            horizontal: CostRange::new(35.0, 55.0),
            lattice_top: CostRange::new(38.0, 60.0),
            premium_factor: 1.35,
        }
    }
}

// ============================================================================
// Shared
// ============================================================================

/// Per-gate price bands (gate, hinges, latch)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GatePrices {
    pub walk: CostRange,
    pub drive: CostRange,
}

impl GatePrices {
    fn new(walk: (f64, f64), drive: (f64, f64)) -> Self {
        GatePrices {
            walk: CostRange::new(walk.0, walk.1),
            drive: CostRange::new(drive.0, drive.1),
        }
    }
}

/// Installation labor $/ft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborRates {
    pub standard: CostRange,
    /// Tall fences: deeper holes, heavier sections, more bracing
    pub complex: CostRange,
}

impl LaborRates {
    fn new(standard: (f64, f64), complex: (f64, f64)) -> Self {
        LaborRates {
            standard: CostRange::new(standard.0, standard.1),
            complex: CostRange::new(complex.0, complex.1),
        }
    }
}

/// Price per bag of concrete mix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcretePrices {
    pub lb50: CostRange,
    pub lb60: CostRange,
    pub lb80: CostRange,
}

impl ConcretePrices {
    pub fn per_bag(&self, bag: BagSize) -> CostRange {
        match bag {
            BagSize::Lb50 => self.lb50,
            BagSize::Lb60 => self.lb60,
            BagSize::Lb80 => self.lb80,
        }
    }
}

impl Default for ConcretePrices {
    fn default() -> Self {
        ConcretePrices {
            lb50: CostRange::new(5.0, 6.5),
            lb60: CostRange::new(5.75, 7.5),
            lb80: CostRange::new(6.5, 9.0),
        }
    }
}
