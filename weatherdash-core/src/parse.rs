use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::WeatherRecord;

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// A raw entry was present but structurally unusable.
///
/// An *absent* entry is not an error (it flows through as `None`); a present
/// entry missing an expected field aborts the refresh that contained it.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed weather entry: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("weather entry carries no condition")]
    MissingCondition,

    #[error("weather entry timestamp {0} is out of range")]
    TimestampOutOfRange(i64),
}

/// The slice of an OpenWeather observation object this tool consumes.
/// Everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct RawEntry {
    dt: i64,
    main: RawMain,
    wind: RawWind,
    weather: Vec<RawCondition>,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct RawWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct RawCondition {
    description: String,
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Normalize one raw API entry into a [`WeatherRecord`].
///
/// `None` in, `None` out: a failed fetch propagates as absence rather than an
/// error so downstream steps can skip it. Temperatures arrive in Kelvin and
/// are converted by exact subtraction; no rounding.
pub fn parse_entry(entry: Option<&Value>) -> Result<Option<WeatherRecord>, ParseError> {
    let Some(value) = entry else {
        return Ok(None);
    };

    let raw = RawEntry::deserialize(value)?;

    let timestamp = DateTime::<Utc>::from_timestamp(raw.dt, 0)
        .ok_or(ParseError::TimestampOutOfRange(raw.dt))?;

    let condition = raw
        .weather
        .into_iter()
        .next()
        .ok_or(ParseError::MissingCondition)?
        .description;

    Ok(Some(WeatherRecord {
        timestamp,
        temperature_c: kelvin_to_celsius(raw.main.temp),
        humidity_pct: raw.main.humidity,
        wind_speed_mps: raw.wind.speed,
        condition,
    }))
}
