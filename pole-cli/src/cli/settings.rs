use clap::Parser;
use pole_quantities::time::Hours;

use crate::core::{settings::Settings, weather::WeatherNames};

#[derive(Parser)]
pub struct SettingsArgs {
    /// Repair time used when neither the pole nor its configuration sets one.
    #[clap(
        long = "default-repair-time-hours",
        env = "DEFAULT_REPAIR_TIME_HOURS",
        default_value = "24"
    )]
    default_repair_time: Hours,

    /// Weather property holding the wind speed, m/s.
    #[clap(long, env = "WIND_SPEED_PROPERTY", default_value = "wind_speed")]
    wind_speed_property: String,

    /// Weather property holding the wind direction, degrees.
    #[clap(long, env = "WIND_DIRECTION_PROPERTY", default_value = "wind_dir")]
    wind_direction_property: String,

    /// Weather property holding the wind gusts, m/s.
    #[clap(long, env = "WIND_GUSTS_PROPERTY", default_value = "wind_gust")]
    wind_gusts_property: String,

    /// Halt the simulation on the first pole failure.
    #[clap(long, env = "STOP_ON_POLE_FAILURE")]
    stop_on_pole_failure: bool,
}

impl SettingsArgs {
    pub fn settings(&self) -> Settings {
        Settings::builder()
            .default_repair_time(self.default_repair_time)
            .weather_names(WeatherNames {
                wind_speed: self.wind_speed_property.clone(),
                wind_direction: self.wind_direction_property.clone(),
                wind_gusts: self.wind_gusts_property.clone(),
            })
            .stop_on_pole_failure(self.stop_on_pole_failure)
            .build()
    }
}
