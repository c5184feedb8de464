//! Small presentation-support statistics: trendline fits over the daily
//! series and condition frequencies over the hourly series.

use std::collections::HashMap;

use crate::model::{DailyAggregate, WeatherRecord};

/// Least-squares line fit over `(x, y)` samples.
///
/// Returns `(slope, intercept)`, or `None` when there are fewer than two
/// samples or the x values carry no spread.
pub fn linear_fit(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
    let sum_xx: f64 = points.iter().map(|(x, _)| x * x).sum();
    let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Some((slope, intercept))
}

/// Trend of one daily statistic across an ascending run of days.
///
/// Days are fitted against their index, so the slope reads as
/// "units per day". The aggregator guarantees the days are unique and
/// ascending, which keeps the fit tie-free.
pub fn daily_trend<F>(days: &[DailyAggregate], statistic: F) -> Option<(f64, f64)>
where
    F: Fn(&DailyAggregate) -> f64,
{
    let points: Vec<(f64, f64)> = days
        .iter()
        .enumerate()
        .map(|(i, day)| (i as f64, statistic(day)))
        .collect();

    linear_fit(&points)
}

/// How often each condition string appears across a set of records,
/// most frequent first. Ties break alphabetically so the output is stable.
pub fn condition_counts(records: &[WeatherRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.condition.as_str()).or_insert(0) += 1;
    }

    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(condition, count)| (condition.to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[test]
    fn recovers_a_perfect_line() {
        let points = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)];
        let (slope, intercept) = linear_fit(&points).unwrap();
        assert!((slope - 2.0).abs() < 1e-12);
        assert!((intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn too_few_points_is_none() {
        assert_eq!(linear_fit(&[]), None);
        assert_eq!(linear_fit(&[(1.0, 1.0)]), None);
    }

    #[test]
    fn zero_x_spread_is_none() {
        let points = [(2.0, 1.0), (2.0, 5.0), (2.0, 9.0)];
        assert_eq!(linear_fit(&points), None);
    }

    #[test]
    fn daily_trend_reads_as_units_per_day() {
        let day = |date: &str, max_temp: f64| DailyAggregate {
            date: date.parse().expect("valid date"),
            min_temperature_c: max_temp - 5.0,
            max_temperature_c: max_temp,
            min_humidity_pct: 40.0,
            max_humidity_pct: 70.0,
            min_wind_speed_mps: 1.0,
            max_wind_speed_mps: 4.0,
            category: None,
        };

        let days = [
            day("2024-05-01", 10.0),
            day("2024-05-02", 11.5),
            day("2024-05-03", 13.0),
        ];

        let (slope, _) = daily_trend(&days, |d| d.max_temperature_c).unwrap();
        assert!((slope - 1.5).abs() < 1e-12);
    }

    #[test]
    fn counts_sort_by_frequency_then_name() {
        let record = |condition: &str| WeatherRecord {
            timestamp: "2024-05-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap(),
            temperature_c: 10.0,
            humidity_pct: 50.0,
            wind_speed_mps: 2.0,
            condition: condition.to_string(),
        };

        let records = [
            record("light rain"),
            record("clear sky"),
            record("light rain"),
            record("broken clouds"),
            record("clear sky"),
            record("light rain"),
        ];

        let counts = condition_counts(&records);
        assert_eq!(
            counts,
            vec![
                ("light rain".to_string(), 3),
                ("clear sky".to_string(), 2),
                ("broken clouds".to_string(), 1),
            ]
        );
    }
}
