//! Core library for the `weatherdash` terminal dashboard.
//!
//! This crate defines:
//! - Configuration handling (API key, preset cities, category thresholds)
//! - The OpenWeather fetch client
//! - The data-shaping pipeline: raw entries -> records -> daily min/max
//!   aggregates -> categories, with CSV snapshot exports along the way
//!
//! It is used by `weatherdash-cli`, but can also be reused by other binaries
//! or services. Everything here is a pure function over explicit inputs;
//! the only state that survives a refresh lives with the caller.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod export;
pub mod fetch;
pub mod model;
pub mod parse;
pub mod pipeline;
pub mod trend;

pub use aggregate::aggregate;
pub use classify::classify;
pub use config::Config;
pub use fetch::{FetchClient, ForecastPayload};
pub use model::{DailyAggregate, Thresholds, WeatherCategory, WeatherRecord};
pub use parse::{ParseError, parse_entry};
pub use pipeline::{Pipeline, RefreshTables};
