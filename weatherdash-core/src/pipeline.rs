use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::aggregate::aggregate;
use crate::export;
use crate::fetch::ForecastPayload;
use crate::model::{DailyAggregate, WeatherRecord};
use crate::parse::parse_entry;

/// The three tables one refresh produces.
///
/// `None` means "no data available" (the corresponding fetch failed), which
/// is distinct from an empty table; renderers show an empty state instead of
/// rows.
#[derive(Debug, Clone, Default)]
pub struct RefreshTables {
    pub current: Option<WeatherRecord>,
    pub hourly: Option<Vec<WeatherRecord>>,
    pub daily: Option<Vec<DailyAggregate>>,
}

/// Orchestrates one refresh: raw payloads in, three tables out, CSV snapshots
/// written along the way.
#[derive(Debug, Clone)]
pub struct Pipeline {
    out_dir: PathBuf,
}

impl Pipeline {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Run the full shaping pass over freshly fetched payloads.
    ///
    /// A malformed entry aborts the refresh; a failed CSV write does not (the
    /// in-memory tables are still returned). The returned daily aggregates
    /// carry no category; classification belongs to the caller, per displayed
    /// day.
    pub fn run(
        &self,
        current: Option<&Value>,
        forecast: Option<&ForecastPayload>,
    ) -> Result<RefreshTables> {
        let current_record =
            parse_entry(current).context("Failed to parse the current weather entry")?;

        // Parse in API order, keeping absent results positional, then drop
        // them before anything downstream sees the sequence.
        let hourly = match forecast {
            None => None,
            Some(payload) => {
                let parsed = payload
                    .list
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        parse_entry(Some(entry))
                            .with_context(|| format!("Failed to parse forecast entry {index}"))
                    })
                    .collect::<Result<Vec<Option<WeatherRecord>>>>()?;

                Some(parsed.into_iter().flatten().collect::<Vec<_>>())
            }
        };

        match &current_record {
            Some(record) => self.persist(export::CURRENT_CSV, |path| {
                export::write_records_csv(path, std::slice::from_ref(record))
            }),
            None => debug!("no current weather data to export"),
        }

        match &hourly {
            Some(records) => self.persist(export::HOURLY_CSV, |path| {
                export::write_records_csv(path, records)
            }),
            None => debug!("no hourly weather data to export"),
        }

        let daily = hourly.as_deref().and_then(aggregate);

        match &daily {
            Some(days) => {
                self.persist(export::DAILY_CSV, |path| export::write_daily_csv(path, days));
            }
            None => debug!("no daily statistics to export"),
        }

        Ok(RefreshTables {
            current: current_record,
            hourly,
            daily,
        })
    }

    // Export failures are diagnostics, not errors: the tables still render.
    fn persist(&self, file_name: &str, write: impl FnOnce(&Path) -> Result<()>) {
        let path = self.out_dir.join(file_name);
        if let Err(err) = write(&path) {
            warn!("weather export to {} failed: {err:#}", path.display());
        }
    }
}
