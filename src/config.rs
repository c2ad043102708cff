use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize, Debug)]
pub struct GeoRef {
    pub lat: f64,
    pub long: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ForecastParameters {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub variables: Vec<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default = "default_interval_seconds")]
    pub default_interval_seconds: i64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Deserialize, Debug)]
pub struct Files {
    pub backup_dir: String,
    #[serde(default)]
    pub replay_file: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub geo_ref: GeoRef,
    pub forecast: ForecastParameters,
    pub files: Files,
    pub general: General,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_interval_seconds() -> i64 {
    3600
}

fn default_timeout_secs() -> u64 {
    30
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;

    parse_config(&toml)
}

/// Parses and validates configuration given as a toml document
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(toml)?;

    config.forecast.variables.retain(|v| !v.trim().is_empty());
    if config.forecast.variables.is_empty() {
        return Err(ConfigError::from("no forecast variables configured"));
    }
    if config.forecast.timezone.as_deref().is_some_and(|t| t.trim().is_empty()) {
        config.forecast.timezone = None;
    }
    if config.forecast.default_interval_seconds <= 0 {
        return Err(ConfigError::from("default interval must be greater than zero"));
    }
    if !config.files.backup_dir.is_empty() && !config.files.backup_dir.ends_with('/') {
        config.files.backup_dir.push('/');
    }

    Ok(config)
}
