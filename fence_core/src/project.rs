//! # Project Data Structures
//!
//! [`ProjectSpec`] is the single input to the takeoff engine: fence run,
//! height, gates, post layout and the material choice. [`FenceProject`] wraps
//! a spec with metadata so it can be saved to a `.fence` file. Only the spec
//! is ever persisted; quantities and costs are recomputed on load.
//!
//! ## Structure
//!
//! ```text
//! FenceProject
//! ├── meta: ProjectMetadata (version, id, name, customer, timestamps)
//! └── spec: ProjectSpec
//!     ├── length / unit / height_ft
//!     ├── walk_gates / drive_gates: GateSpec
//!     ├── corners / end_posts
//!     ├── concrete: ConcreteOptions
//!     ├── waste_buffer / include_permit
//!     └── material: MaterialOptions (tagged union)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fence_core::project::{FenceProject, ProjectSpec};
//!
//! let mut spec = ProjectSpec::default();
//! spec.length = 150.0;
//! spec.corners = 2;
//!
//! let project = FenceProject::new("Back yard", "Jane Homeowner", spec);
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("Back yard"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{FenceError, FenceResult};
use crate::materials::{MaterialKind, MaterialOptions};
use crate::units::{Feet, LengthUnit};

/// Current schema version for .fence files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Default walk gate opening (ft)
pub const DEFAULT_WALK_GATE_WIDTH_FT: f64 = 4.0;

/// Default drive gate opening (ft)
pub const DEFAULT_DRIVE_GATE_WIDTH_FT: f64 = 12.0;

/// Longest run the engine accepts (ft), about 19 miles
pub const MAX_LENGTH_FT: f64 = 100_000.0;

// ============================================================================
// Input Spec
// ============================================================================

/// Fence project input.
///
/// Every field has a default, so partial JSON deserializes cleanly.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 150.0,
///   "unit": "ft",
///   "height_ft": 6,
///   "walk_gates": { "count": 1, "width_ft": 4.0 },
///   "drive_gates": { "count": 0, "width_ft": 12.0 },
///   "corners": 2,
///   "end_posts": 2,
///   "concrete": { "enabled": true, "bag_size": "50lb" },
///   "waste_buffer": true,
///   "include_permit": false,
///   "material": { "type": "wood", "style": "privacy" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSpec {
    /// Total fence run, in `unit`
    pub length: f64,
    pub unit: LengthUnit,
    /// Fence height (ft); must be stocked for the chosen material
    pub height_ft: u32,
    pub walk_gates: GateSpec,
    pub drive_gates: GateSpec,
    /// Corner posts (direction changes)
    pub corners: u32,
    /// End posts (free-standing run ends not at a corner or gate)
    pub end_posts: u32,
    pub concrete: ConcreteOptions,
    /// Add 10% to physical materials for cutting and measurement loss
    pub waste_buffer: bool,
    /// Include a permit fee band in the estimate
    pub include_permit: bool,
    pub material: MaterialOptions,
}

impl Default for ProjectSpec {
    fn default() -> Self {
        ProjectSpec {
            length: 0.0,
            unit: LengthUnit::Feet,
            height_ft: 6,
            walk_gates: GateSpec::new(0, DEFAULT_WALK_GATE_WIDTH_FT),
            drive_gates: GateSpec::new(0, DEFAULT_DRIVE_GATE_WIDTH_FT),
            corners: 0,
            end_posts: 0,
            concrete: ConcreteOptions::default(),
            waste_buffer: false,
            include_permit: false,
            material: MaterialOptions::default(),
        }
    }
}

impl ProjectSpec {
    /// Spec for a given material with that material's default options.
    pub fn for_material(kind: MaterialKind, length_ft: f64, height_ft: u32) -> Self {
        ProjectSpec {
            length: length_ft,
            height_ft,
            material: kind.default_options(),
            ..ProjectSpec::default()
        }
    }

    /// Total run converted to feet (unsanitized)
    pub fn length_ft(&self) -> Feet {
        self.unit.to_feet(self.length)
    }

    /// Return a copy with every numeric input clamped into range.
    ///
    /// Negative, NaN and infinite lengths, widths and spacings become 0.
    /// A run longer than [`MAX_LENGTH_FT`] once converted to feet, including
    /// one that overflows to infinity during conversion, is capped at
    /// `MAX_LENGTH_FT` and restated in feet. A zero rail override falls back to the height-derived count, and
    /// barbed wire strands are clamped to 1-3. Nothing here fails; inputs
    /// that remain unusable after clamping are caught by [`validate`].
    ///
    /// [`validate`]: ProjectSpec::validate
    pub fn sanitized(&self) -> ProjectSpec {
        let mut spec = self.clone();
        spec.length = clamp_field("length", spec.length);
        let length_ft = spec.length_ft().value();
        if length_ft > MAX_LENGTH_FT {
            tracing::warn!(
                length = spec.length,
                unit = spec.unit.suffix(),
                max_ft = MAX_LENGTH_FT,
                "length capped at maximum run"
            );
            spec.length = MAX_LENGTH_FT;
            spec.unit = LengthUnit::Feet;
        }
        spec.walk_gates.width_ft = clamp_field("walk_gates.width_ft", spec.walk_gates.width_ft);
        spec.drive_gates.width_ft = clamp_field("drive_gates.width_ft", spec.drive_gates.width_ft);

        match &mut spec.material {
            MaterialOptions::Wood(o) => {
                o.post_spacing_ft = clamp_field("post_spacing_ft", o.post_spacing_ft);
                o.board_width_in = clamp_field("board_width_in", o.board_width_in);
                o.board_spacing_in = clamp_field("board_spacing_in", o.board_spacing_in);
                if o.rail_count == Some(0) {
                    tracing::warn!("rail_count override of 0 ignored, deriving from height");
                    o.rail_count = None;
                }
            }
            MaterialOptions::Vinyl(o) => {
                o.panel_width_ft = clamp_field("panel_width_ft", o.panel_width_ft);
            }
            MaterialOptions::ChainLink(o) => {
                o.post_spacing_ft = clamp_field("post_spacing_ft", o.post_spacing_ft);
                let strands = o.barbed_wire_strands.clamp(1, 3);
                if strands != o.barbed_wire_strands {
                    tracing::warn!(
                        requested = o.barbed_wire_strands,
                        clamped = strands,
                        "barbed_wire_strands out of range"
                    );
                    o.barbed_wire_strands = strands;
                }
            }
            MaterialOptions::Aluminum(o) => {
                o.panel_width_ft = clamp_field("panel_width_ft", o.panel_width_ft);
            }
            MaterialOptions::Composite(_) => {}
        }
        spec
    }

    /// Reject inputs the engine cannot compute with.
    ///
    /// Call on a [`sanitized`](ProjectSpec::sanitized) spec.
    pub fn validate(&self) -> FenceResult<()> {
        let allowed = self.material.allowed_heights();
        if !allowed.contains(&self.height_ft) {
            return Err(FenceError::unsupported_height(
                self.material.kind().display_name(),
                self.height_ft,
                allowed,
            ));
        }

        let spacing = self.material.spacing_ft();
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(FenceError::invalid_input(
                spacing_field(&self.material),
                spacing.to_string(),
                "Post spacing must be positive",
            ));
        }

        if let MaterialOptions::Wood(o) = &self.material {
            if o.style.has_boards() && o.board_module_in() <= 0.0 {
                return Err(FenceError::invalid_input(
                    "board_width_in",
                    o.board_module_in().to_string(),
                    "Board width plus spacing must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Name of the field that controls spacing for a material
pub(crate) fn spacing_field(material: &MaterialOptions) -> &'static str {
    match material {
        MaterialOptions::Wood(_) | MaterialOptions::ChainLink(_) => "post_spacing_ft",
        MaterialOptions::Vinyl(_) | MaterialOptions::Aluminum(_) => "panel_width_ft",
        MaterialOptions::Composite(_) => "section_width_ft",
    }
}

fn clamp_field(field: &str, value: f64) -> f64 {
    let clamped = Feet(value).clamp_non_negative().value();
    if clamped != value {
        tracing::warn!(field, value, "input clamped to 0");
    }
    clamped
}

/// A category of gates: how many, and how wide each opening is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateSpec {
    pub count: u32,
    /// Opening width of one gate (ft)
    pub width_ft: f64,
}

impl GateSpec {
    pub fn new(count: u32, width_ft: f64) -> Self {
        GateSpec { count, width_ft }
    }

    /// Combined opening width of all gates in this category (ft)
    pub fn total_width_ft(&self) -> f64 {
        f64::from(self.count) * self.width_ft
    }
}

/// Concrete bag weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BagSize {
    #[serde(rename = "50lb")]
    Lb50,
    #[serde(rename = "60lb")]
    Lb60,
    #[default]
    #[serde(rename = "80lb")]
    Lb80,
}

impl BagSize {
    pub const ALL: [BagSize; 3] = [BagSize::Lb50, BagSize::Lb60, BagSize::Lb80];

    pub fn pounds(&self) -> u32 {
        match self {
            BagSize::Lb50 => 50,
            BagSize::Lb60 => 60,
            BagSize::Lb80 => 80,
        }
    }
}

/// Whether posts are set in concrete, and with what bag size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcreteOptions {
    pub enabled: bool,
    pub bag_size: BagSize,
}

impl Default for ConcreteOptions {
    fn default() -> Self {
        ConcreteOptions {
            enabled: true,
            bag_size: BagSize::Lb80,
        }
    }
}

// ============================================================================
// Saved Project
// ============================================================================

/// Saved project: metadata plus the input spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FenceProject {
    pub meta: ProjectMetadata,
    pub spec: ProjectSpec,
}

impl FenceProject {
    /// Create a new project around a spec.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fence_core::project::{FenceProject, ProjectSpec};
    ///
    /// let project = FenceProject::new("Front yard", "Sam", ProjectSpec::default());
    /// assert_eq!(project.meta.name, "Front yard");
    /// ```
    pub fn new(name: impl Into<String>, customer: impl Into<String>, spec: ProjectSpec) -> Self {
        let now = Utc::now();
        FenceProject {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                name: name.into(),
                customer: customer.into(),
                created: now,
                modified: now,
            },
            spec,
        }
    }

    /// Replace the spec and update the modified timestamp.
    pub fn set_spec(&mut self, spec: ProjectSpec) {
        self.spec = spec;
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for FenceProject {
    fn default() -> Self {
        FenceProject::new("", "", ProjectSpec::default())
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,
    pub id: Uuid,
    /// Project name (e.g., "Back yard privacy fence")
    pub name: String,
    /// Customer or property owner
    pub customer: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{ChainLinkOptions, WoodOptions};

    #[test]
    fn test_sanitize_clamps_negative_and_nan() {
        let mut spec = ProjectSpec::default();
        spec.length = -40.0;
        spec.walk_gates = GateSpec::new(1, f64::NAN);
        spec.drive_gates = GateSpec::new(1, -12.0);

        let clean = spec.sanitized();
        assert_eq!(clean.length, 0.0);
        assert_eq!(clean.walk_gates.width_ft, 0.0);
        assert_eq!(clean.drive_gates.width_ft, 0.0);
        assert_eq!(clean.walk_gates.count, 1);
    }

    #[test]
    fn test_sanitize_caps_huge_lengths() {
        let spec = ProjectSpec::for_material(MaterialKind::Wood, 1e30, 6);
        let clean = spec.sanitized();
        assert_eq!(clean.length, MAX_LENGTH_FT);
        assert_eq!(clean.unit, LengthUnit::Feet);

        // finite in metres, infinite once converted to feet
        let mut metric = ProjectSpec::for_material(MaterialKind::Vinyl, 1e308, 6);
        metric.unit = LengthUnit::Meters;
        assert!(metric.length_ft().value().is_infinite());
        let clean = metric.sanitized();
        assert_eq!(clean.length_ft().value(), MAX_LENGTH_FT);

        let mut ok = ProjectSpec::for_material(MaterialKind::Vinyl, 30_000.0, 6);
        ok.unit = LengthUnit::Meters;
        assert_eq!(ok.sanitized(), ok);
    }

    #[test]
    fn test_sanitize_material_options() {
        let mut spec = ProjectSpec::default();
        spec.material = MaterialOptions::Wood(WoodOptions {
            rail_count: Some(0),
            board_spacing_in: -1.0,
            ..WoodOptions::default()
        });
        match spec.sanitized().material {
            MaterialOptions::Wood(o) => {
                assert_eq!(o.rail_count, None);
                assert_eq!(o.board_spacing_in, 0.0);
            }
            other => panic!("expected wood, got {:?}", other),
        }

        spec.material = MaterialOptions::ChainLink(ChainLinkOptions {
            barbed_wire_strands: 9,
            ..ChainLinkOptions::default()
        });
        match spec.sanitized().material {
            MaterialOptions::ChainLink(o) => assert_eq!(o.barbed_wire_strands, 3),
            other => panic!("expected chain link, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_spacing() {
        let mut spec = ProjectSpec::default();
        spec.material = MaterialOptions::Wood(WoodOptions {
            post_spacing_ft: -8.0,
            ..WoodOptions::default()
        });
        let err = spec.sanitized().validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("post_spacing_ft"));
    }

    #[test]
    fn test_validate_rejects_unstocked_height() {
        let spec = ProjectSpec::for_material(MaterialKind::Aluminum, 100.0, 8);
        let err = spec.validate().unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_HEIGHT");

        let ok = ProjectSpec::for_material(MaterialKind::ChainLink, 100.0, 12);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_board_module() {
        let mut spec = ProjectSpec::default();
        spec.material = MaterialOptions::Wood(WoodOptions {
            board_width_in: 0.0,
            ..WoodOptions::default()
        });
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_partial_json_spec() {
        let spec: ProjectSpec = serde_json::from_str(
            r#"{"length": 30, "unit": "m", "material": {"type": "vinyl", "post_caps": false}}"#,
        )
        .unwrap();
        assert_eq!(spec.unit, LengthUnit::Meters);
        assert_eq!(spec.height_ft, 6);
        assert_eq!(spec.walk_gates.width_ft, DEFAULT_WALK_GATE_WIDTH_FT);
        assert!(spec.concrete.enabled);
        assert_eq!(spec.material.kind(), MaterialKind::Vinyl);
        assert!((spec.length_ft().value() - 98.4252).abs() < 1e-9);
    }

    #[test]
    fn test_project_serialization() {
        let project = FenceProject::new("Side yard", "Pat", ProjectSpec::default());
        let json = serde_json::to_string_pretty(&project).unwrap();
        assert!(json.contains("Side yard"));
        assert!(json.contains(SCHEMA_VERSION));

        let roundtrip: FenceProject = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.id, project.meta.id);
        assert_eq!(roundtrip.spec, project.spec);
    }

    #[test]
    fn test_bag_size_serialization() {
        assert_eq!(serde_json::to_string(&BagSize::Lb60).unwrap(), "\"60lb\"");
        assert_eq!(BagSize::Lb50.pounds(), 50);
    }
}
