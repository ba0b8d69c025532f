use bon::Builder;
use pole_quantities::time::Hours;

use crate::core::weather::WeatherNames;

/// Simulation-wide settings shared by all poles.
#[derive(Clone, Debug, Builder)]
pub struct Settings {
    /// Repair time used when neither the pole nor its configuration sets one.
    #[builder(default = Hours(24.0))]
    pub default_repair_time: Hours,

    #[builder(default)]
    pub weather_names: WeatherNames,

    /// Halt the simulation on the first pole failure instead of scheduling the repair.
    #[builder(default)]
    pub stop_on_pole_failure: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}
