use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{DailyAggregate, WeatherRecord};

/// Fixed export file names. Each file is a full snapshot and is overwritten
/// on every refresh; downstream consumers rely on the exact column set.
pub const CURRENT_CSV: &str = "current_weather_data.csv";
pub const HOURLY_CSV: &str = "hourly_weather_data.csv";
pub const DAILY_CSV: &str = "daily_weather_stats.csv";

const RECORD_HEADER: [&str; 5] = [
    "Datetime",
    "Temperature (C)",
    "Humidity (%)",
    "Wind Speed (m/s)",
    "Weather",
];

const DAILY_HEADER: [&str; 7] = [
    "Date",
    "Min Temperature (C)",
    "Max Temperature (C)",
    "Min Humidity (%)",
    "Max Humidity (%)",
    "Min Wind Speed (m/s)",
    "Max Wind Speed (m/s)",
];

/// Write a record table (the current snapshot or the hourly series).
pub fn write_records_csv(path: &Path, records: &[WeatherRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;

    writer.write_record(RECORD_HEADER)?;
    for record in records {
        writer.write_record(&[
            record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            record.temperature_c.to_string(),
            record.humidity_pct.to_string(),
            record.wind_speed_mps.to_string(),
            record.condition.clone(),
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush export file: {}", path.display()))?;
    Ok(())
}

/// Write the daily min/max statistics table. The category column is
/// deliberately absent: the export carries raw statistics only.
pub fn write_daily_csv(path: &Path, days: &[DailyAggregate]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;

    writer.write_record(DAILY_HEADER)?;
    for day in days {
        writer.write_record(&[
            day.date.format("%Y-%m-%d").to_string(),
            day.min_temperature_c.to_string(),
            day.max_temperature_c.to_string(),
            day.min_humidity_pct.to_string(),
            day.max_humidity_pct.to_string(),
            day.min_wind_speed_mps.to_string(),
            day.max_wind_speed_mps.to_string(),
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush export file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn record(iso: &str, temp: f64) -> WeatherRecord {
        WeatherRecord {
            timestamp: iso.parse::<DateTime<Utc>>().expect("valid timestamp"),
            temperature_c: temp,
            humidity_pct: 50.0,
            wind_speed_mps: 3.0,
            condition: "clear sky".to_string(),
        }
    }

    #[test]
    fn records_round_trip_through_csv() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(HOURLY_CSV);

        let records = [
            record("2024-05-01T00:00:00Z", 12.0),
            record("2024-05-01T03:00:00Z", 14.5),
        ];
        write_records_csv(&path, &records).expect("write succeeds");

        let mut reader = csv::Reader::from_path(&path).expect("read back");
        let headers: Vec<String> =
            reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, RECORD_HEADER);

        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().expect("rows parse");
        assert_eq!(rows.len(), records.len());
        assert_eq!(&rows[0][0], "2024-05-01 00:00:00");
        assert_eq!(&rows[0][1], "12");
        assert_eq!(&rows[1][1], "14.5");
    }

    #[test]
    fn daily_round_trip_through_csv() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DAILY_CSV);

        let days = [DailyAggregate {
            date: "2024-05-01".parse().expect("valid date"),
            min_temperature_c: 8.0,
            max_temperature_c: 17.25,
            min_humidity_pct: 40.0,
            max_humidity_pct: 85.0,
            min_wind_speed_mps: 0.5,
            max_wind_speed_mps: 6.0,
            category: None,
        }];
        write_daily_csv(&path, &days).expect("write succeeds");

        let mut reader = csv::Reader::from_path(&path).expect("read back");
        let headers: Vec<String> =
            reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, DAILY_HEADER);

        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().expect("rows parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "2024-05-01");
        assert_eq!(&rows[0][2], "17.25");
    }

    #[test]
    fn exports_overwrite_not_append() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CURRENT_CSV);

        write_records_csv(&path, &[record("2024-05-01T00:00:00Z", 12.0)]).unwrap();
        write_records_csv(&path, &[record("2024-05-02T00:00:00Z", 20.0)]).unwrap();

        let mut reader = csv::Reader::from_path(&path).expect("read back");
        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().expect("rows parse");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "2024-05-02 00:00:00");
    }
}
