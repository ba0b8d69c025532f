use pole_quantities::{moment::FootPounds, speed::MetersPerSecond};
use serde::Serialize;

use crate::core::{
    accumulators::Accumulators,
    pole::moments::{self, WIND_PRESSURE_COEFFICIENT},
    status::Status,
};

/// Bending moment as a function of the wind speed: `M = a·p(V) + b·V + c`.
///
/// There is no linear term in the current wind model, `b` is always zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StressPolynomial {
    pub a: FootPounds,
    pub b: FootPounds,
    pub c: FootPounds,
}

/// Outcome of combining the accumulated moments at postsync.
#[derive(Copy, Clone, Debug, Default, Serialize)]
pub struct Evaluation {
    pub total_moment: FootPounds,

    /// Ratio of the total moment to the resisting moment.
    pub pole_stress: f64,

    /// Derivative of the pole stress with respect to the wind speed.
    pub susceptibility: f64,

    pub polynomial: StressPolynomial,
}

impl Evaluation {
    pub fn new(
        accumulators: &Accumulators,
        pole_moment_nowind: FootPounds,
        resisting_moment: FootPounds,
        wind_speed: MetersPerSecond,
    ) -> Self {
        let sync = &accumulators.sync;
        let susceptibility = if wind_speed <= MetersPerSecond::ZERO {
            0.0
        } else if resisting_moment > FootPounds::ZERO {
            2.0 * (sync.bending_moment() / resisting_moment)
                / wind_speed.0
                / WIND_PRESSURE_COEFFICIENT
        } else {
            f64::INFINITY
        };
        Self {
            total_moment: sync.total_moment(),
            pole_stress: moments::stress(sync.total_moment(), resisting_moment),
            susceptibility,
            polynomial: StressPolynomial {
                a: pole_moment_nowind + accumulators.nowind.moment(),
                b: FootPounds::ZERO,
                c: sync.wire_tension,
            },
        }
    }

    pub fn status(&self) -> Status {
        if self.pole_stress < 1.0 { Status::Ok } else { Status::Failed }
    }
}
