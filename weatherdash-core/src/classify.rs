use crate::model::{DailyAggregate, Thresholds, WeatherCategory};

/// Assign a category to one day's aggregate.
///
/// The rules form an ordered cascade and the first match wins:
/// 1. max temperature above the sunny threshold -> Sunny
/// 2. min temperature below the rainy floor AND max humidity above the rainy
///    humidity bar -> Rainy
/// 3. everything else -> Partly Cloudy
///
/// Both comparisons are strict; a day sitting exactly on a threshold does not
/// cross it.
pub fn classify(day: &DailyAggregate, thresholds: &Thresholds) -> WeatherCategory {
    if day.max_temperature_c > thresholds.sunny_max_temp_c {
        WeatherCategory::Sunny
    } else if day.min_temperature_c < thresholds.rainy_min_temp_c
        && day.max_humidity_pct > thresholds.rainy_humidity_pct
    {
        WeatherCategory::Rainy
    } else {
        WeatherCategory::PartlyCloudy
    }
}
