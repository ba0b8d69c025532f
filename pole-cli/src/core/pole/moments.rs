//! Static bending equations of a tapered wooden pole.

use pole_quantities::{
    angle::Degrees,
    length::{Feet, Inches},
    moment::FootPounds,
    pressure::PoundsPerSquareFoot,
    speed::MetersPerSecond,
};

use crate::core::configuration::PoleConfiguration;

/// Section modulus constant, `π / 32 / 12` with diameters in inches and moments in ft·lb.
const SECTION_CONSTANT: f64 = 0.008_186;

/// Wind pressure per squared wind speed, the second factor converts meters per second to mph.
pub const WIND_PRESSURE_COEFFICIENT: f64 = 0.002_56 * 2.24;

/// Diameter at the effective height, linearly interpolated along the taper.
pub fn effective_diameter(configuration: &PoleConfiguration, height: Feet) -> Inches {
    configuration.ground_diameter
        - (configuration.ground_diameter - configuration.top_diameter)
            * (height / configuration.exposed_length())
}

/// Resisting moment of a cross-section given the cubed solid diameter.
pub fn resisting_moment(configuration: &PoleConfiguration, diameter_cubed: f64) -> FootPounds {
    FootPounds(
        SECTION_CONSTANT
            * configuration.strength_factor
            * configuration.fiber_strength.0
            * diameter_cubed,
    )
}

/// Resisting moment at the ground line with the hollow core taken out.
pub fn degraded_resisting_moment(
    configuration: &PoleConfiguration,
    hollow_diameter: Inches,
) -> FootPounds {
    resisting_moment(
        configuration,
        configuration.ground_diameter.cubed() - hollow_diameter.cubed(),
    )
}

/// Pole moment per unit of wind pressure.
pub fn pole_moment_nowind(configuration: &PoleConfiguration, height: Feet) -> FootPounds {
    FootPounds(
        height.squared()
            * (configuration.ground_diameter.0 + 2.0 * configuration.top_diameter.0)
            / 72.0
            * configuration.overload_factor,
    )
}

/// Moment of the pole's own weight when it leans.
pub fn tilt_moment(configuration: &PoleConfiguration, height: Feet, tilt_angle: Degrees) -> FootPounds {
    let top_diameter = Feet::from(configuration.top_diameter).0;
    let ground_diameter = Feet::from(configuration.ground_diameter).0;
    let taper = (ground_diameter - top_diameter) / 2.0;
    FootPounds(
        0.125
            * configuration.material_density.0
            * std::f64::consts::PI
            * height.squared()
            * taper.mul_add(-taper, ground_diameter * ground_diameter)
            * tilt_angle.sin(),
    )
}

pub fn wind_pressure(wind_speed: MetersPerSecond) -> PoundsPerSquareFoot {
    PoundsPerSquareFoot(WIND_PRESSURE_COEFFICIENT * wind_speed.squared())
}

/// Moment under the specified wind pressure given the moment per unit of pressure.
pub fn wind_moment(nowind_moment: FootPounds, pressure: PoundsPerSquareFoot) -> FootPounds {
    nowind_moment * pressure.0
}

/// Wind speed at which the bending moment reaches the resisting moment.
///
/// Infinite when nothing is exposed to the wind, zero when the wire tension alone breaks the pole.
pub fn critical_wind_speed(
    resisting_moment: FootPounds,
    wire_tension: FootPounds,
    nowind_moment: FootPounds,
) -> MetersPerSecond {
    if nowind_moment <= FootPounds::ZERO {
        return MetersPerSecond(f64::INFINITY);
    }
    let failure_pressure = ((resisting_moment - wire_tension) / nowind_moment).max(0.0);
    MetersPerSecond((failure_pressure / WIND_PRESSURE_COEFFICIENT).sqrt())
}

/// Vector sum of the static tilt moment and the wind moment acting from the wind direction.
pub fn combine(
    static_moment: FootPounds,
    wind_moment: FootPounds,
    tilt_direction: Degrees,
    wind_direction: Degrees,
) -> FootPounds {
    let angle = (tilt_direction - wind_direction).to_radians();
    let x = wind_moment.0.mul_add(angle.cos(), static_moment.0);
    let y = wind_moment.0 * angle.sin();
    FootPounds(x.hypot(y))
}

/// Stress, the ratio of the applied moment to the resisting moment.
///
/// A pole without any resisting moment left is infinitely stressed.
pub fn stress(total_moment: FootPounds, resisting_moment: FootPounds) -> f64 {
    if resisting_moment > FootPounds::ZERO {
        total_moment / resisting_moment
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn test_effective_diameter_interpolates() {
        let configuration = PoleConfiguration::class_2_45ft();
        assert_abs_diff_eq!(effective_diameter(&configuration, Feet(39.0)).0, 9.9, epsilon = 1e-12);
        assert_abs_diff_eq!(effective_diameter(&configuration, Feet::ZERO).0, 20.25, epsilon = 1e-12);
        assert_abs_diff_eq!(effective_diameter(&configuration, Feet(19.5)).0, 15.075, epsilon = 1e-12);
    }

    #[test]
    fn test_ground_line_resisting_moment() {
        let configuration = PoleConfiguration::class_2_45ft();
        let expected = 0.008_186 * 0.85 * 8000.0 * 20.25_f64.powi(3);
        assert_relative_eq!(
            degraded_resisting_moment(&configuration, Inches::ZERO).0,
            expected,
            max_relative = 1e-12,
        );
    }

    #[test]
    fn test_hollow_core_weakens() {
        let configuration = PoleConfiguration::class_2_45ft();
        let solid = degraded_resisting_moment(&configuration, Inches::ZERO);
        let hollow = degraded_resisting_moment(&configuration, Inches(10.0));
        assert!(hollow < solid);
        assert!(degraded_resisting_moment(&configuration, Inches(21.0)) < FootPounds::ZERO);
    }

    #[test]
    fn test_nowind_moment() {
        let configuration = PoleConfiguration::class_2_45ft();
        let expected = 39.0 * 39.0 * (20.25 + 2.0 * 9.9) / 72.0 * 4.0;
        assert_relative_eq!(
            pole_moment_nowind(&configuration, Feet(39.0)).0,
            expected,
            max_relative = 1e-12,
        );
    }

    #[test]
    fn test_upright_pole_has_no_tilt_moment() {
        let configuration = PoleConfiguration::class_2_45ft();
        assert_abs_diff_eq!(tilt_moment(&configuration, Feet(39.0), Degrees::ZERO).0, 0.0);
        assert!(tilt_moment(&configuration, Feet(39.0), Degrees(5.0)) > FootPounds::ZERO);
    }

    #[test]
    fn test_wind_pressure_is_quadratic() {
        assert_abs_diff_eq!(wind_pressure(MetersPerSecond(10.0)).0, 0.573_44, epsilon = 1e-9);
        assert_abs_diff_eq!(wind_pressure(MetersPerSecond(20.0)).0, 2.293_76, epsilon = 1e-9);
    }

    #[test]
    fn test_critical_wind_speed_breaks_the_pole() {
        let resisting = FootPounds(462_000.0);
        let nowind = FootPounds(3384.0);
        let speed = critical_wind_speed(resisting, FootPounds::ZERO, nowind);
        let moment = wind_moment(nowind, wind_pressure(speed));
        assert_relative_eq!(stress(moment, resisting), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_critical_wind_speed_edge_cases() {
        assert_eq!(
            critical_wind_speed(FootPounds(1.0), FootPounds::ZERO, FootPounds::ZERO),
            MetersPerSecond(f64::INFINITY),
        );
        assert_eq!(
            critical_wind_speed(FootPounds(1.0), FootPounds(2.0), FootPounds(1.0)),
            MetersPerSecond::ZERO,
        );
    }

    #[test]
    fn test_combine_aligned_and_crosswind() {
        let aligned = combine(FootPounds(3.0), FootPounds(4.0), Degrees(90.0), Degrees(90.0));
        assert_abs_diff_eq!(aligned.0, 7.0, epsilon = 1e-9);
        let opposite = combine(FootPounds(3.0), FootPounds(4.0), Degrees(0.0), Degrees(180.0));
        assert_abs_diff_eq!(opposite.0, 1.0, epsilon = 1e-9);
        let crosswind = combine(FootPounds(3.0), FootPounds(4.0), Degrees(90.0), Degrees(0.0));
        assert_abs_diff_eq!(crosswind.0, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_resisting_moment_is_infinite_stress() {
        assert_eq!(stress(FootPounds::ZERO, FootPounds::ZERO), f64::INFINITY);
        assert_abs_diff_eq!(stress(FootPounds(1.0), FootPounds(4.0)), 0.25);
    }
}
