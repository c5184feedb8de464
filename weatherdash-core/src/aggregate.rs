use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{DailyAggregate, WeatherRecord};

/// Group records by calendar date and compute min/max statistics per day.
///
/// Returns days in ascending date order. The min and max of each statistic
/// are taken independently, so a day's min-temperature record need not be the
/// record that set its max. Empty input means "no data available" and yields
/// `None`, never an empty vector; callers that hold an absent sequence must
/// not call this at all.
///
/// The grouping key is the date component of the UTC timestamp; no
/// localization is applied.
pub fn aggregate(records: &[WeatherRecord]) -> Option<Vec<DailyAggregate>> {
    if records.is_empty() {
        return None;
    }

    let mut days: BTreeMap<NaiveDate, DailyAggregate> = BTreeMap::new();

    for record in records {
        let date = record.timestamp.date_naive();
        days.entry(date)
            .and_modify(|day| fold(day, record))
            .or_insert_with(|| seed(date, record));
    }

    Some(days.into_values().collect())
}

fn seed(date: NaiveDate, record: &WeatherRecord) -> DailyAggregate {
    DailyAggregate {
        date,
        min_temperature_c: record.temperature_c,
        max_temperature_c: record.temperature_c,
        min_humidity_pct: record.humidity_pct,
        max_humidity_pct: record.humidity_pct,
        min_wind_speed_mps: record.wind_speed_mps,
        max_wind_speed_mps: record.wind_speed_mps,
        category: None,
    }
}

fn fold(day: &mut DailyAggregate, record: &WeatherRecord) {
    day.min_temperature_c = day.min_temperature_c.min(record.temperature_c);
    day.max_temperature_c = day.max_temperature_c.max(record.temperature_c);
    day.min_humidity_pct = day.min_humidity_pct.min(record.humidity_pct);
    day.max_humidity_pct = day.max_humidity_pct.max(record.humidity_pct);
    day.min_wind_speed_mps = day.min_wind_speed_mps.min(record.wind_speed_mps);
    day.max_wind_speed_mps = day.max_wind_speed_mps.max(record.wind_speed_mps);
}
