//! # Unit Types
//!
//! Lightweight newtype wrappers for the lengths and areas a fence takeoff
//! deals with. They serialize as bare numbers so project JSON stays clean.
//!
//! The engine works in US customary units internally (feet and inches,
//! matching how fence materials are sold). Metric run lengths are converted
//! once, at the geometry boundary.
//!
//! ## Example
//!
//! ```rust
//! use fence_core::units::{Feet, Inches, LengthUnit, Meters};
//!
//! let run = Feet(12.0);
//! let run_in: Inches = run.into();
//! assert_eq!(run_in.0, 144.0);
//!
//! let metric: Feet = Meters(10.0).into();
//! assert!((metric.0 - 32.8084).abs() < 1e-9);
//!
//! assert_eq!(LengthUnit::Meters.to_feet(10.0), metric);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Feet per metre
pub const FEET_PER_METER: f64 = 3.28084;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

impl From<Meters> for Feet {
    fn from(m: Meters) -> Self {
        Feet(m.0 * FEET_PER_METER)
    }
}

impl From<Feet> for Meters {
    fn from(ft: Feet) -> Self {
        Meters(ft.0 / FEET_PER_METER)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square feet (fence face area for slats, stain, etc.)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl Mul<Feet> for Feet {
    type Output = SqFt;
    fn mul(self, rhs: Feet) -> SqFt {
        SqFt(self.0 * rhs.0)
    }
}

// ============================================================================
// Input Unit Selector
// ============================================================================

/// Unit the user entered the fence run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Feet
    #[default]
    #[serde(rename = "ft")]
    Feet,
    /// Metres
    #[serde(rename = "m")]
    Meters,
}

impl LengthUnit {
    /// Convert a raw value in this unit to feet
    pub fn to_feet(self, value: f64) -> Feet {
        match self {
            LengthUnit::Feet => Feet(value),
            LengthUnit::Meters => Meters(value).into(),
        }
    }

    /// Short suffix for display ("ft", "m")
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Feet => "ft",
            LengthUnit::Meters => "m",
        }
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }

            /// Clamp to zero, mapping NaN and infinities to zero as well
            pub fn clamp_non_negative(self) -> Self {
                if self.0.is_finite() && self.0 > 0.0 {
                    self
                } else {
                    Self(0.0)
                }
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(Meters);
impl_arithmetic!(SqFt);
