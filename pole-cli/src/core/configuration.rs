use pole_quantities::{
    density::PoundsPerCubicFoot,
    length::{Feet, Inches},
    pressure::PoundsPerSquareInch,
    rate::InchesPerYear,
    time::Hours,
};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Pole class geometry and material, shared by all poles of the same kind.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PoleConfiguration {
    /// Diameter at the ground line.
    pub ground_diameter: Inches,

    /// Diameter at the pole top.
    pub top_diameter: Inches,

    /// Total length including the embedded part.
    pub pole_length: Feet,

    /// Setting depth.
    pub pole_depth: Feet,

    pub material_density: PoundsPerCubicFoot,

    /// Wood strength factor (NESC grade B construction, 250B).
    #[serde(alias = "strength_factor_250b_wood")]
    pub strength_factor: f64,

    pub fiber_strength: PoundsPerSquareInch,

    /// How fast the core hollows out, zero disables the degradation.
    #[serde(default)]
    pub degradation_rate: InchesPerYear,

    /// Transverse overload factor for the general wind loading.
    #[serde(alias = "overload_factor_transverse_general")]
    pub overload_factor: f64,

    /// Typical repair time, overrides the global default.
    #[serde(default)]
    pub repair_time: Option<Hours>,
}

impl PoleConfiguration {
    /// Length of the pole above the ground line.
    pub fn exposed_length(&self) -> Feet {
        self.pole_length - self.pole_depth
    }

    pub fn validate(&self) -> Result {
        ensure!(
            self.ground_diameter > Inches::ZERO && self.ground_diameter.is_finite(),
            "invalid ground diameter: {}",
            self.ground_diameter,
        );
        ensure!(
            self.top_diameter > Inches::ZERO && self.top_diameter <= self.ground_diameter,
            "top diameter {} must be positive and not exceed the ground diameter {}",
            self.top_diameter,
            self.ground_diameter,
        );
        ensure!(
            self.pole_depth >= Feet::ZERO && self.pole_depth < self.pole_length,
            "pole depth {} must be within the pole length {}",
            self.pole_depth,
            self.pole_length,
        );
        ensure!(
            self.strength_factor > 0.0 && self.strength_factor.is_finite(),
            "invalid strength factor: {}",
            self.strength_factor,
        );
        ensure!(
            self.fiber_strength > PoundsPerSquareInch::ZERO,
            "invalid fiber strength: {}",
            self.fiber_strength,
        );
        ensure!(
            self.degradation_rate >= InchesPerYear::ZERO,
            "invalid degradation rate: {}",
            self.degradation_rate,
        );
        ensure!(
            self.overload_factor > 0.0 && self.overload_factor.is_finite(),
            "invalid overload factor: {}",
            self.overload_factor,
        );
        Ok(())
    }
}

#[cfg(test)]
impl PoleConfiguration {
    /// Class 2, 45-foot southern pine.
    pub const fn class_2_45ft() -> Self {
        Self {
            ground_diameter: Inches(20.25),
            top_diameter: Inches(9.9),
            pole_length: Feet(45.0),
            pole_depth: Feet(6.0),
            material_density: PoundsPerCubicFoot(31.2),
            strength_factor: 0.85,
            fiber_strength: PoundsPerSquareInch(8000.0),
            degradation_rate: InchesPerYear(0.02),
            overload_factor: 4.0,
            repair_time: None,
        }
    }
}
