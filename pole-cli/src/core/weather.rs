use std::{collections::BTreeMap, fmt::Debug, sync::Arc};

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Anything publishing named, time-dependent weather properties.
pub trait WeatherFeed: Debug {
    /// Whether the feed publishes the property at all.
    fn has(&self, property: &str) -> bool;

    /// Value in effect at the specified time.
    fn get(&self, property: &str, at: DateTime<Utc>) -> Option<f64>;
}

/// Names under which the weather feed publishes the wind properties.
#[derive(Clone, Debug)]
pub struct WeatherNames {
    pub wind_speed: String,
    pub wind_direction: String,
    pub wind_gusts: String,
}

impl Default for WeatherNames {
    fn default() -> Self {
        Self {
            wind_speed: "wind_speed".to_owned(),
            wind_direction: "wind_dir".to_owned(),
            wind_gusts: "wind_gust".to_owned(),
        }
    }
}

/// Where the values of a wind quantity come from.
#[derive(Clone, Debug, Default)]
pub enum InputSource {
    /// Only the locally set value is used.
    #[default]
    Local,

    /// Fresh values are pulled from the feed on every commit.
    External { feed: Arc<dyn WeatherFeed>, property: String },
}

impl InputSource {
    pub fn read(&self, at: DateTime<Utc>) -> Option<f64> {
        match self {
            Self::Local => None,
            Self::External { feed, property } => feed.get(property, at),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct WeatherRecord {
    pub at: DateTime<Utc>,

    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

/// Weather observations, each held until the next one carrying the same property.
#[derive(Clone, Debug, Deserialize)]
pub struct WeatherSeries {
    pub records: Vec<WeatherRecord>,
}

impl WeatherFeed for WeatherSeries {
    fn has(&self, property: &str) -> bool {
        self.records.iter().any(|record| record.values.contains_key(property))
    }

    fn get(&self, property: &str, at: DateTime<Utc>) -> Option<f64> {
        self.records
            .iter()
            .filter(|record| record.at <= at)
            .filter_map(|record| Some((record.at, *record.values.get(property)?)))
            .max_by_key(|(at, _)| *at)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
impl WeatherSeries {
    /// Series of `(hour offset, wind speed, wind direction)` observations since the `start`.
    pub fn hourly(start: DateTime<Utc>, observations: &[(i64, f64, f64)]) -> Self {
        let records = observations
            .iter()
            .map(|(hours, speed, direction)| WeatherRecord {
                at: start + chrono::TimeDelta::hours(*hours),
                values: BTreeMap::from([
                    ("wind_speed".to_owned(), *speed),
                    ("wind_dir".to_owned(), *direction),
                ]),
            })
            .collect();
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_sample_and_hold() {
        let start = Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap();
        let series = WeatherSeries::hourly(start, &[(0, 5.0, 90.0), (2, 7.0, 180.0)]);
        assert!(series.has("wind_speed"));
        assert!(!series.has("wind_gust"));
        assert_eq!(series.get("wind_speed", start - chrono::TimeDelta::hours(1)), None);
        assert_eq!(series.get("wind_speed", start), Some(5.0));
        assert_eq!(series.get("wind_speed", start + chrono::TimeDelta::hours(1)), Some(5.0));
        assert_eq!(series.get("wind_dir", start + chrono::TimeDelta::hours(3)), Some(180.0));
    }

    #[test]
    fn test_deserialize_records() {
        let series: WeatherSeries = toml::from_str(
            r#"
                [[records]]
                at = "2020-06-01T00:00:00Z"
                wind_speed = 12
                wind_gust = 20.5
            "#,
        )
        .unwrap();
        let at = Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(series.get("wind_speed", at), Some(12.0));
        assert_eq!(series.get("wind_gust", at), Some(20.5));
        assert!(!series.has("wind_dir"));
    }

    #[test]
    fn test_local_source_reads_nothing() {
        assert_eq!(InputSource::Local.read(Utc::now()), None);
    }
}
