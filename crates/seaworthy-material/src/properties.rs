//! Physical properties of a structural material.

use serde::{Deserialize, Serialize};
use seaworthy_types::{SeaworthyError, SeaworthyResult};

/// Physical properties of a structural material.
///
/// | Property | Used by |
/// |---|---|
/// | `mass` | point mass, spring mass factor |
/// | `strength` | spring breaking elongation |
/// | `stiffness` | spring stiffness coefficient |
/// | `melting_temperature` | melting stiffness ramp, plastic rest-length growth |
/// | `thermal_conductivity` | spring thermal conductivity |
/// | `strain_threshold_fraction` | stress onset threshold |
/// | `buoyancy_volume_fill` | point buoyancy |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralMaterial {
    /// Unique name (e.g., "oak_wood").
    pub name: String,

    /// Mass of one point made of this material (kg).
    pub mass: f32,

    /// Relative strength. Scales the elongation a spring tolerates
    /// before breaking.
    pub strength: f32,

    /// Relative stiffness. Range: 0.0–1.0 (1.0 = fully rigid).
    pub stiffness: f32,

    /// Temperature (K) above which the material starts melting.
    pub melting_temperature: f32,

    /// Thermal conductivity (W/(m·K)).
    pub thermal_conductivity: f32,

    /// Fraction of the breaking elongation above which a spring
    /// made of this material is considered stressed.
    pub strain_threshold_fraction: f32,

    /// Fraction of the point's volume that displaces water. Range: 0.0–1.0.
    pub buoyancy_volume_fill: f32,

    /// Hull materials are watertight.
    #[serde(default)]
    pub is_hull: bool,

    /// Rope materials form ropes.
    #[serde(default)]
    pub is_rope: bool,
}

impl StructuralMaterial {
    /// Checks that every property is in its valid range.
    pub fn validate(&self) -> SeaworthyResult<()> {
        let invalid = |what: &str| {
            Err(SeaworthyError::InvalidMaterial(format!(
                "{}: {}",
                self.name, what
            )))
        };

        if self.name.is_empty() {
            return invalid("name is empty");
        }
        if !(self.mass > 0.0) {
            return invalid("mass must be positive");
        }
        if !(self.strength >= 0.0) {
            return invalid("strength must be non-negative");
        }
        if !(0.0..=1.0).contains(&self.stiffness) {
            return invalid("stiffness must be within [0, 1]");
        }
        if !(self.melting_temperature > 0.0) {
            return invalid("melting temperature must be positive");
        }
        if !(self.thermal_conductivity >= 0.0) {
            return invalid("thermal conductivity must be non-negative");
        }
        if !(self.strain_threshold_fraction > 0.0 && self.strain_threshold_fraction < 1.0) {
            return invalid("strain threshold fraction must be within (0, 1)");
        }
        if !(0.0..=1.0).contains(&self.buoyancy_volume_fill) {
            return invalid("buoyancy volume fill must be within [0, 1]");
        }

        Ok(())
    }
}
