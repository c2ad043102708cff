use std::fs;
use chrono::{DateTime, Duration, Local, NaiveDateTime, Utc};
use glob::glob;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use crate::errors::BackupError;
use crate::models::forecast::{ForecastEncoding, ForecastSample};

const FILE_SUFFIX: &str = "_forecast.json";

#[derive(Serialize, Deserialize)]
pub struct ForecastBackup {
    pub date_time: DateTime<Local>,
    pub encoding: ForecastEncoding,
    pub samples: Vec<ForecastSample>,
}

/// Saves a fetched forecast, both as received and reconstructed, and removes
/// saved forecasts older than 48 hours
///
/// # Arguments
///
/// * 'backup_dir' - the directory to save the file to, ending with a slash
/// * 'date_time' - the date and time the forecast was fetched
/// * 'encoding' - the forecast as received
/// * 'samples' - the reconstructed forecast
pub fn save_forecast(
    backup_dir: &str,
    date_time: DateTime<Local>,
    encoding: &ForecastEncoding,
    samples: &[ForecastSample]) -> Result<String, BackupError> {

    fs::create_dir_all(backup_dir)?;
    let file_path = format!("{}{}{}", backup_dir, date_time.with_timezone(&Utc).format("%Y%m%d%H%M%S"), FILE_SUFFIX);

    let backup = ForecastBackup {
        date_time,
        encoding: encoding.clone(),
        samples: samples.to_vec(),
    };

    let json = serde_json::to_string_pretty(&backup)?;
    fs::write(&file_path, json)?;

    remove_old_forecasts(backup_dir, date_time.with_timezone(&Utc))?;

    Ok(file_path)
}

/// Loads a saved forecast
///
/// # Arguments
///
/// * 'file_path' - path to the backup file
pub fn load_forecast(file_path: &str) -> Result<ForecastBackup, BackupError> {
    let json = fs::read_to_string(file_path)?;
    let backup: ForecastBackup = serde_json::from_str(&json)?;

    Ok(backup)
}

/// Removes forecast files that are more than 48 hours older than the given time
///
/// # Arguments
///
/// * 'backup_dir' - the directory holding forecast files
/// * 'now' - reference time
fn remove_old_forecasts(backup_dir: &str, now: DateTime<Utc>) -> Result<(), BackupError> {
    let pattern = format!("{}*{}", backup_dir, FILE_SUFFIX);
    for entry in glob(&pattern)? {
        if let Ok(path) = entry {
            if let Some(filename) = path.file_name().and_then(|f| f.to_str()) {
                let Some(stamp) = filename.get(0..14) else { continue };
                let Ok(datetime) = NaiveDateTime::parse_from_str(stamp, "%Y%m%d%H%M%S") else {
                    warn!("skipping {}, no timestamp in file name", filename);
                    continue;
                };
                let datetime: DateTime<Utc> = datetime.and_utc();
                if now - datetime > Duration::hours(48) {
                    info!("removing old forecast {}", filename);
                    fs::remove_file(path)?;
                }
            }
        }
    }

    Ok(())
}
