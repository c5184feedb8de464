//! Terminal rendering of the three refreshed tables.
//!
//! Panels: a current-conditions line, the daily min/max table with per-day
//! categories, a "today" forecast card,
//! the max-temperature trend over the forecast window, and a breakdown of
//! how often each condition appears. Absent tables degrade to an explicit
//! empty state instead of an error.

use weatherdash_core::{DailyAggregate, RefreshTables, WeatherRecord, trend};

pub fn render_dashboard(city: &str, tables: &RefreshTables) {
    println!();
    println!("Weather for {city}");
    println!("{}", "=".repeat(12 + city.chars().count()));

    render_current(tables.current.as_ref());
    render_today_card(tables.daily.as_deref());
    render_daily(tables.daily.as_deref());
    render_forecast_summary(tables.hourly.as_deref(), tables.daily.as_deref());
}

fn render_current(record: Option<&WeatherRecord>) {
    println!("\nCurrent conditions");
    let Some(record) = record else {
        println!("  (no data)");
        return;
    };

    println!(
        "  {}  {:>6.2} °C  {:>3.0} % humidity  {:>4.1} m/s wind  {}",
        record.timestamp.format("%Y-%m-%d %H:%M"),
        record.temperature_c,
        record.humidity_pct,
        record.wind_speed_mps,
        record.condition,
    );
}

/// The first forecast day as a compact card: date, high, low, category.
fn render_today_card(days: Option<&[DailyAggregate]>) {
    let Some(today) = days.and_then(<[DailyAggregate]>::first) else {
        return;
    };

    println!("\nToday · {}", today.date.format("%Y-%m-%d"));
    println!("  High: {:.2} °C", today.max_temperature_c);
    println!("  Low:  {:.2} °C", today.min_temperature_c);
    if let Some(category) = today.category {
        println!("  {category}");
    }
}

fn render_daily(days: Option<&[DailyAggregate]>) {
    println!("\nDaily forecast");
    let Some(days) = days else {
        println!("  (no data)");
        return;
    };

    println!(
        "  {:<12} {:>8} {:>8} {:>8} {:>8} {:>9} {:>9}  {}",
        "Date", "Tmin", "Tmax", "Hmin", "Hmax", "Wmin", "Wmax", "Category"
    );
    for day in days {
        println!(
            "  {:<12} {:>8.2} {:>8.2} {:>8.0} {:>8.0} {:>9.1} {:>9.1}  {}",
            day.date.format("%Y-%m-%d").to_string(),
            day.min_temperature_c,
            day.max_temperature_c,
            day.min_humidity_pct,
            day.max_humidity_pct,
            day.min_wind_speed_mps,
            day.max_wind_speed_mps,
            day.category.map(|c| c.to_string()).unwrap_or_default(),
        );
    }
}

fn render_forecast_summary(hourly: Option<&[WeatherRecord]>, days: Option<&[DailyAggregate]>) {
    let Some(hourly) = hourly else {
        println!("\nForecast summary");
        println!("  (no data)");
        return;
    };

    println!("\nForecast summary");

    if let Some((slope, _)) =
        days.and_then(|days| trend::daily_trend(days, |d| d.max_temperature_c))
    {
        let direction = if slope >= 0.0 { "rising" } else { "falling" };
        println!("  Daily highs {direction} {:.2} °C/day", slope.abs());
    }

    let counts = trend::condition_counts(hourly);
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        println!("  (no entries)");
        return;
    }

    println!("  Conditions over {total} forecast slots:");
    for (condition, count) in counts {
        let share = 100.0 * count as f64 / total as f64;
        println!("    {condition:<20} {share:>5.1} %");
    }
}
