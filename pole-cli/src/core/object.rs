use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::{
    configuration::PoleConfiguration,
    weather::{WeatherFeed, WeatherSeries},
};

/// Named host object a pole may be bound to.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum Object {
    PoleConfiguration(Arc<PoleConfiguration>),
    Weather(Arc<WeatherSeries>),
}

impl Object {
    pub const fn class(&self) -> &'static str {
        match self {
            Self::PoleConfiguration(_) => "pole_configuration",
            Self::Weather(_) => "weather",
        }
    }
}

/// Any object can be bound as the weather source, but only the weather publishes the wind.
impl WeatherFeed for Object {
    fn has(&self, property: &str) -> bool {
        match self {
            Self::Weather(series) => series.has(property),
            Self::PoleConfiguration(_) => false,
        }
    }

    fn get(&self, property: &str, at: DateTime<Utc>) -> Option<f64> {
        match self {
            Self::Weather(series) => series.get(property, at),
            Self::PoleConfiguration(_) => None,
        }
    }
}
