use chrono::{DateTime, Utc};
use pole_quantities::{
    angle::Degrees,
    force::Pounds,
    length::{Feet, Inches},
    moment::FootPounds,
    pressure::PoundsPerSquareFoot,
    speed::MetersPerSecond,
    time::Hours,
};
use serde::Serialize;

use crate::core::{pole::Pole, status::Status};

/// Externally visible state of a pole after a step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PoleReport {
    pub name: String,
    pub status: Status,

    pub tilt_angle: Degrees,
    pub tilt_direction: Degrees,
    pub install_year: i32,
    pub repair_time: Hours,
    pub guy_height: Feet,

    pub wind_speed: MetersPerSecond,
    pub wind_direction: Degrees,
    pub wind_gusts: MetersPerSecond,
    pub wind_pressure: PoundsPerSquareFoot,
    pub critical_wind_speed: MetersPerSecond,

    pub current_hollow_diameter: Inches,
    pub resisting_moment: FootPounds,

    pub pole_moment: FootPounds,
    pub pole_moment_nowind: FootPounds,
    pub equipment_moment: FootPounds,
    pub equipment_moment_nowind: FootPounds,
    pub wire_moment: FootPounds,
    pub wire_moment_nowind: FootPounds,
    pub wire_tension: FootPounds,
    pub wire_load: Pounds,
    pub wire_load_nowind: Pounds,
    pub total_moment: FootPounds,

    pub pole_stress: f64,
    pub pole_stress_polynomial_a: FootPounds,
    pub pole_stress_polynomial_b: FootPounds,
    pub pole_stress_polynomial_c: FootPounds,
    pub susceptibility: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_time: Option<DateTime<Utc>>,
}

impl Pole {
    pub fn report(&self) -> PoleReport {
        let nowind = &self.accumulators.nowind;
        let sync = &self.accumulators.sync;
        let evaluation = &self.evaluation;
        let wind = self.wind();
        PoleReport {
            name: self.name.clone(),
            status: self.status,
            tilt_angle: self.tilt.angle,
            tilt_direction: self.tilt.direction,
            install_year: self.install_year,
            repair_time: self.repair_time,
            guy_height: self.guy_height,
            wind_speed: wind.speed,
            wind_direction: wind.direction,
            wind_gusts: wind.gusts,
            wind_pressure: wind.pressure,
            critical_wind_speed: self.critical_wind_speed,
            current_hollow_diameter: self.hollow_diameter,
            resisting_moment: self.resisting_moment,
            pole_moment: sync.pole_moment,
            pole_moment_nowind: self.pole_moment_nowind,
            equipment_moment: sync.equipment_moment,
            equipment_moment_nowind: nowind.equipment_moment,
            wire_moment: sync.wire_moment,
            wire_moment_nowind: nowind.wire_moment,
            wire_tension: sync.wire_tension,
            wire_load: sync.wire_load,
            wire_load_nowind: nowind.wire_load,
            total_moment: evaluation.total_moment,
            pole_stress: evaluation.pole_stress,
            pole_stress_polynomial_a: evaluation.polynomial.a,
            pole_stress_polynomial_b: evaluation.polynomial.b,
            pole_stress_polynomial_c: evaluation.polynomial.c,
            susceptibility: evaluation.susceptibility,
            down_time: self.down_time,
        }
    }
}
