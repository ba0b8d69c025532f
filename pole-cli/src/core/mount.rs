//! Equipment and guy wires hanging on the pole.

use std::fmt::Debug;

use pole_quantities::{force::Pounds, moment::FootPounds};
use serde::Deserialize;

use crate::core::{
    accumulators::{NowindAccumulators, SyncAccumulators},
    pole::WindConditions,
};

/// Dependent of the pole, which adds its moments while the accumulators are open.
pub trait Mount: Debug {
    fn name(&self) -> &str;

    /// Add the moments per unit of wind pressure, called on every step.
    fn contribute_nowind(&self, accumulators: &mut NowindAccumulators);

    /// Add the moments under the current wind, called only when the pole recalculates.
    fn contribute(&self, wind: &WindConditions, accumulators: &mut SyncAccumulators);
}

/// Mount with fixed loading declared in a scenario.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StaticMount {
    Equipment {
        name: String,

        /// Static moment without any wind.
        #[serde(default)]
        moment: FootPounds,

        /// Moment per unit of wind pressure.
        #[serde(default)]
        wind_moment: FootPounds,
    },

    Wire {
        name: String,

        #[serde(default)]
        moment: FootPounds,

        #[serde(default)]
        wind_moment: FootPounds,

        #[serde(default)]
        tension: FootPounds,

        #[serde(default)]
        load: Pounds,
    },
}

impl Mount for StaticMount {
    fn name(&self) -> &str {
        match self {
            Self::Equipment { name, .. } | Self::Wire { name, .. } => name,
        }
    }

    fn contribute_nowind(&self, accumulators: &mut NowindAccumulators) {
        match self {
            Self::Equipment { wind_moment, .. } => {
                accumulators.equipment_moment += *wind_moment;
            }
            Self::Wire { wind_moment, load, .. } => {
                accumulators.wire_moment += *wind_moment;
                accumulators.wire_load += *load;
            }
        }
    }

    fn contribute(&self, wind: &WindConditions, accumulators: &mut SyncAccumulators) {
        let pressure = wind.pressure.0;
        match self {
            Self::Equipment { moment, wind_moment, .. } => {
                accumulators.equipment_moment += *moment + *wind_moment * pressure;
            }
            Self::Wire { moment, wind_moment, tension, load, .. } => {
                accumulators.wire_moment += *moment + *wind_moment * pressure;
                accumulators.wire_tension += *tension;
                accumulators.wire_load += *load;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pole_quantities::{angle::Degrees, pressure::PoundsPerSquareFoot, speed::MetersPerSecond};

    use super::*;
    use crate::core::accumulators::Accumulators;

    const WIND: WindConditions = WindConditions {
        speed: MetersPerSecond(10.0),
        direction: Degrees::ZERO,
        gusts: MetersPerSecond::ZERO,
        pressure: PoundsPerSquareFoot(2.0),
    };

    fn contribute(mount: &StaticMount, accumulators: &mut Accumulators) {
        mount.contribute_nowind(&mut accumulators.nowind);
        mount.contribute(&WIND, &mut accumulators.sync);
    }

    #[test]
    fn test_deserialize_mounts() {
        #[derive(Deserialize)]
        struct Mounts {
            mounts: Vec<StaticMount>,
        }

        let Mounts { mounts } = toml::from_str(
            r"
                [[mounts]]
                kind = 'equipment'
                name = 'transformer'
                moment = 1500

                [[mounts]]
                kind = 'wire'
                name = 'primary'
                wind_moment = 120
                tension = 800
            ",
        )
        .unwrap();
        assert_eq!(mounts.len(), 2);
        assert_eq!(mounts[0].name(), "transformer");
        let StaticMount::Wire { tension, .. } = &mounts[1] else {
            panic!("expected a wire, got {:?}", mounts[1]);
        };
        assert_eq!(*tension, FootPounds(800.0));
    }

    #[test]
    fn test_equipment_contribution() {
        let equipment = StaticMount::Equipment {
            name: "transformer".to_owned(),
            moment: FootPounds(1000.0),
            wind_moment: FootPounds(50.0),
        };
        let mut accumulators = Accumulators::default();
        contribute(&equipment, &mut accumulators);
        assert_eq!(accumulators.nowind.equipment_moment, FootPounds(50.0));
        assert_eq!(accumulators.sync.equipment_moment, FootPounds(1100.0));
        assert_eq!(accumulators.sync.wire_moment, FootPounds::ZERO);
    }

    #[test]
    fn test_wire_contribution() {
        let wire = StaticMount::Wire {
            name: "primary".to_owned(),
            moment: FootPounds::ZERO,
            wind_moment: FootPounds(100.0),
            tension: FootPounds(700.0),
            load: Pounds(250.0),
        };
        let mut accumulators = Accumulators::default();
        contribute(&wire, &mut accumulators);
        contribute(&wire, &mut accumulators);
        assert_eq!(accumulators.nowind.wire_moment, FootPounds(200.0));
        assert_eq!(accumulators.nowind.wire_load, Pounds(500.0));
        assert_eq!(accumulators.sync.wire_moment, FootPounds(400.0));
        assert_eq!(accumulators.sync.wire_tension, FootPounds(1400.0));
        assert_eq!(accumulators.sync.wire_load, Pounds(500.0));
    }
}
