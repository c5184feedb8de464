use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use weatherdash_core::{Config, FetchClient, Pipeline, classify};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherdash", version, about = "Weather dashboard in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and pick a default city.
    Configure,

    /// Refresh and display weather for one city, then exit.
    Show {
        /// City name; falls back to the configured default.
        city: Option<String>,

        /// Directory the CSV snapshots are written to.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Interactive dashboard: pick a city, refresh on demand.
    Dashboard {
        /// Directory the CSV snapshots are written to.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, out_dir } => {
                let config = Config::load()?;
                let city = city.unwrap_or_else(|| config.default_city().to_string());
                refresh_and_render(&config, &city, &out_dir).await
            }
            Command::Dashboard { out_dir } => dashboard(&out_dir).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeather API key:").prompt()?;
    config.set_api_key(api_key.trim().to_string());

    let city = Select::new("Default city:", config.cities.clone()).prompt()?;
    config.set_default_city(city);

    config.save()?;
    println!("Configuration saved to {}", Config::config_file_path()?.display());

    Ok(())
}

/// One full refresh: fetch both payloads, shape them, classify the days the
/// dashboard will show, render.
async fn refresh_and_render(config: &Config, city: &str, out_dir: &Path) -> Result<()> {
    let client = FetchClient::new(config.api_key()?.to_string());

    let current = client.fetch_current(city).await;
    let forecast = client.fetch_forecast(city).await;

    let pipeline = Pipeline::new(out_dir);
    let mut tables = pipeline.run(current.as_ref(), forecast.as_ref())?;
    tracing::debug!(
        "refresh for '{city}' done (current: {}, hourly rows: {:?})",
        tables.current.is_some(),
        tables.hourly.as_ref().map(Vec::len),
    );

    if let Some(days) = tables.daily.as_mut() {
        for day in days.iter_mut() {
            day.category = Some(classify(day, &config.thresholds));
        }
    }

    render::render_dashboard(city, &tables);
    Ok(())
}

async fn dashboard(out_dir: &Path) -> Result<()> {
    let config = Config::load()?;
    let mut city = config.default_city().to_string();

    loop {
        // A failed refresh (e.g. a malformed API entry) should not kill the
        // session; report it and fall back to the menu.
        if let Err(err) = refresh_and_render(&config, &city, out_dir).await {
            eprintln!("Refresh failed: {err:#}");
        }

        const REFRESH: &str = "Refresh";
        const CHANGE_CITY: &str = "Change city";
        const QUIT: &str = "Quit";

        let action = Select::new("What next?", vec![REFRESH, CHANGE_CITY, QUIT]).prompt()?;
        match action {
            CHANGE_CITY => city = pick_city(&config)?,
            QUIT => break,
            _ => {}
        }
    }

    Ok(())
}

/// Preset-list selector with a free-text escape hatch.
fn pick_city(config: &Config) -> Result<String> {
    const OTHER: &str = "Other…";

    let mut options = config.cities.clone();
    options.push(OTHER.to_string());

    let choice = Select::new("City:", options).prompt()?;
    if choice == OTHER {
        Ok(Text::new("City name:").prompt()?.trim().to_string())
    } else {
        Ok(choice)
    }
}
