use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One normalized weather observation.
///
/// Produced by [`crate::parse::parse_entry`] from a raw API entry; the current
/// snapshot is exactly one of these, the forecast is one per 3-hour slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Observation time in UTC, second precision.
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_mps: f64,
    /// Free-text condition, e.g. "clear sky".
    pub condition: String,
}

/// Per-calendar-date min/max summary of a set of records.
///
/// `category` is left empty by the aggregator; the presentation layer fills it
/// in via [`crate::classify::classify`] for the days it displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    pub min_humidity_pct: f64,
    pub max_humidity_pct: f64,
    pub min_wind_speed_mps: f64,
    pub max_wind_speed_mps: f64,
    pub category: Option<WeatherCategory>,
}

/// Coarse weather category derived from a day's min/max statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCategory {
    Sunny,
    Rainy,
    PartlyCloudy,
}

impl WeatherCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Sunny => "Sunny",
            WeatherCategory::Rainy => "Rainy",
            WeatherCategory::PartlyCloudy => "Partly Cloudy",
        }
    }
}

impl std::fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier thresholds. Caller-supplied; the config file can override the
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// A day whose max temperature exceeds this is Sunny.
    pub sunny_max_temp_c: f64,
    /// Rainy requires the min temperature below this...
    pub rainy_min_temp_c: f64,
    /// ...and the max humidity above this.
    pub rainy_humidity_pct: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            sunny_max_temp_c: 25.0,
            rainy_min_temp_c: 15.0,
            rainy_humidity_pct: 80.0,
        }
    }
}
