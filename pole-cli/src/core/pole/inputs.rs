use std::{fmt::Display, sync::Arc};

use chrono::{DateTime, Utc};
use pole_quantities::{
    angle::Degrees,
    length::Inches,
    pressure::PoundsPerSquareFoot,
    rate::InchesPerYear,
    speed::MetersPerSecond,
};

use crate::{
    core::weather::{InputSource, WeatherFeed, WeatherNames},
    prelude::*,
};

/// Wind as seen by the pole and its dependents during the current step.
#[derive(Copy, Clone, Debug)]
pub struct WindConditions {
    pub speed: MetersPerSecond,
    pub direction: Degrees,
    pub gusts: MetersPerSecond,
    pub pressure: PoundsPerSquareFoot,
}

/// Current value of an environmental input and where fresh values come from.
#[derive(Clone, Debug)]
pub struct Input<T> {
    pub value: T,
    pub source: InputSource,
}

impl<T> Input<T>
where
    T: Copy + Default + PartialEq + Display + From<f64>,
{
    fn bind(value: T, feed: Option<&Arc<dyn WeatherFeed>>, property: &str, quantity: &str) -> Self {
        let source = match feed {
            None => InputSource::Local,
            Some(feed) if !feed.has(property) => {
                warn!("weather data does not include {property}, using local wind {quantity} data only");
                InputSource::Local
            }
            Some(feed) => {
                if value == T::default() {
                    debug!(property, "wind {quantity} is bound to the weather data");
                } else {
                    warn!(local = %value, "weather data will overwrite local wind {quantity} data");
                }
                InputSource::External { feed: Arc::clone(feed), property: property.to_owned() }
            }
        };
        Self { value, source }
    }

    /// Pull the fresh value, keeping the current one if the feed has nothing yet.
    fn refresh(&mut self, at: DateTime<Utc>) {
        if let Some(value) = self.source.read(at) {
            self.value = T::from(value);
        }
    }
}

#[derive(Clone, Debug)]
pub struct WindInputs {
    pub speed: Input<MetersPerSecond>,
    pub direction: Input<Degrees>,
    pub gusts: Input<MetersPerSecond>,
}

impl WindInputs {
    /// Bind each quantity to the weather feed independently, falling back to the local values.
    pub fn bind(
        speed: MetersPerSecond,
        direction: Degrees,
        gusts: MetersPerSecond,
        feed: Option<&Arc<dyn WeatherFeed>>,
        names: &WeatherNames,
    ) -> Self {
        Self {
            speed: Input::bind(speed, feed, &names.wind_speed, "speed"),
            direction: Input::bind(direction, feed, &names.wind_direction, "direction"),
            gusts: Input::bind(gusts, feed, &names.wind_gusts, "gusts"),
        }
    }

    pub fn refresh(&mut self, at: DateTime<Utc>) {
        self.speed.refresh(at);
        self.direction.refresh(at);
        self.gusts.refresh(at);
    }
}

/// Hollow core diameter after the specified age.
///
/// [`None`] when the degradation model does not apply: the pole is not older than a year,
/// or the material does not degrade.
pub fn hollow_diameter(age: i32, degradation_rate: InchesPerYear) -> Option<Inches> {
    (age > 0 && degradation_rate > InchesPerYear::ZERO)
        .then(|| degradation_rate.over_years(2.0 * f64::from(age)))
}
