//! Simulation scenario: the time span, the named objects, the pole and whatever hangs on it.

use std::{collections::BTreeMap, fmt::Debug, fs, path::Path, sync::Arc};

use chrono::{DateTime, Utc};
use itertools::Itertools;
use pole_quantities::{angle::Degrees, length::Feet, speed::MetersPerSecond, time::Hours};
use serde::Deserialize;

use crate::{
    core::{
        mount::{Mount, StaticMount},
        object::Object,
        pole::{Pole, PoleParameters},
        settings::Settings,
        weather::WeatherFeed,
    },
    prelude::*,
};

#[derive(Debug, Deserialize)]
pub struct Scenario {
    /// Inclusive.
    pub start: DateTime<Utc>,

    /// Exclusive.
    pub end: DateTime<Utc>,

    /// Named host objects the pole refers to.
    #[serde(default)]
    pub objects: BTreeMap<String, Object>,

    pub pole: PoleDeclaration,

    #[serde(default)]
    pub mounts: Vec<StaticMount>,
}

/// Pole as declared in the scenario, objects are referred to by their names.
#[derive(Debug, Deserialize)]
pub struct PoleDeclaration {
    pub name: String,
    pub configuration: String,

    #[serde(default)]
    pub weather: Option<String>,

    pub install_year: i32,

    #[serde(default)]
    pub tilt_angle: Degrees,

    #[serde(default)]
    pub tilt_direction: Degrees,

    #[serde(default)]
    pub repair_time: Option<Hours>,

    #[serde(default)]
    pub guy_height: Feet,

    #[serde(default)]
    pub wind_speed: MetersPerSecond,

    #[serde(default)]
    pub wind_direction: Degrees,

    #[serde(default)]
    pub wind_gusts: MetersPerSecond,
}

impl Scenario {
    #[instrument(name = "Reading the scenario…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))?;
        let scenario: Self = toml::from_slice(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result {
        ensure!(self.start < self.end, "scenario ends at {} before it starts at {}", self.end, self.start);
        for (name, object) in &self.objects {
            if let Object::PoleConfiguration(configuration) = object {
                configuration
                    .validate()
                    .with_context(|| format!("invalid pole configuration `{name}`"))?;
            }
        }
        Ok(())
    }

    pub fn build_pole(&self, settings: &Settings) -> Result<Pole> {
        let declaration = &self.pole;
        let configuration = self.objects.get(&declaration.configuration).cloned();
        if configuration.is_none() {
            warn!(name = %declaration.configuration, "configuration object is not declared");
        }
        let weather = declaration
            .weather
            .as_ref()
            .map(|name| {
                self.objects
                    .get(name)
                    .cloned()
                    .map(|object| Arc::new(object) as Arc<dyn WeatherFeed>)
                    .with_context(|| format!("weather object `{name}` is not declared"))
            })
            .transpose()?;
        let parameters = PoleParameters::builder()
            .name(declaration.name.as_str())
            .maybe_configuration(configuration)
            .maybe_weather(weather)
            .install_year(declaration.install_year)
            .tilt_angle(declaration.tilt_angle)
            .tilt_direction(declaration.tilt_direction)
            .maybe_repair_time(declaration.repair_time)
            .guy_height(declaration.guy_height)
            .wind_speed(declaration.wind_speed)
            .wind_direction(declaration.wind_direction)
            .wind_gusts(declaration.wind_gusts)
            .now(self.start)
            .build();
        Pole::try_new(parameters, settings)
            .with_context(|| format!("failed to initialize pole `{}`", declaration.name))
    }

    pub fn mounts(&self) -> Vec<Box<dyn Mount>> {
        self.mounts.iter().cloned().map(|mount| Box::new(mount) as Box<dyn Mount>).collect_vec()
    }
}
