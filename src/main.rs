use chrono::Local;
use log::{error, info, warn};
use crate::backup::{load_forecast, save_forecast};
use crate::config::Config;
use crate::display::print_forecast;
use crate::errors::MeteoGridRunError;
use crate::initialization::{init, Mgr};
use crate::reconstruction::reconstruct;

mod backup;
mod config;
mod display;
mod errors;
mod initialization;
mod logging;
mod manager_open_meteo;
mod models;
mod reconstruction;

fn main() -> anyhow::Result<()> {
    let (config, mgr) = init()?;

    if let Err(e) = run(&config, &mgr) {
        error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Fetches a forecast, reconstructs its time axis, prints it and saves it.
/// A failed save is logged but doesn't fail the run.
/// If a replay file is configured the forecast is read from that file instead of being fetched.
///
/// # Arguments
///
/// * 'config' - the configuration
/// * 'mgr' - managers used to fetch data
fn run(config: &Config, mgr: &Mgr) -> Result<(), MeteoGridRunError> {
    if let Some(replay_file) = &config.files.replay_file {
        return replay(replay_file);
    }

    let fetched_at = Local::now();
    let encoding = mgr.open_meteo.new_forecast()?;
    let samples = reconstruct(&encoding)?;
    info!("reconstructed {} samples", samples.len());

    print_forecast(&samples, "Forecast");

    if !config.files.backup_dir.is_empty() {
        match save_forecast(&config.files.backup_dir, fetched_at, &encoding, &samples) {
            Ok(path) => info!("forecast saved to {}", path),
            Err(e) => error!("failed to save forecast: {}", e),
        }
    }

    Ok(())
}

/// Reconstructs a previously saved forecast and prints it
///
/// # Arguments
///
/// * 'file_path' - path to the saved forecast
fn replay(file_path: &str) -> Result<(), MeteoGridRunError> {
    let backup = load_forecast(file_path)?;
    let samples = reconstruct(&backup.encoding)?;
    if samples != backup.samples {
        warn!("reconstruction differs from the one saved {}", backup.date_time);
    }

    print_forecast(&samples, &format!("Replay {}", backup.date_time.format("%Y-%m-%d %H:%M:%S")));

    Ok(())
}
