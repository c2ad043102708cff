use std::env;
use log::info;
use crate::config::{load_config, Config};
use crate::errors::MeteoGridInitError;
use crate::logging::setup_logger;
use crate::manager_open_meteo::OpenMeteo;

pub struct Mgr {
    pub open_meteo: OpenMeteo,
}

/// Loads configuration, sets up logging and returns the configuration together with
/// the managers needed to fetch forecasts
///
pub fn init() -> Result<(Config, Mgr), MeteoGridInitError> {
    let config_path = env::var("CONFIG_PATH")
        .map_err(|e| MeteoGridInitError(format!("error getting CONFIG_PATH: {}", e)))?;

    let config = load_config(&config_path)?;
    setup_logger(&config.general)?;

    info!("meteogrid version: {}", env!("CARGO_PKG_VERSION"));

    let open_meteo = OpenMeteo::new(config.geo_ref.lat, config.geo_ref.long, &config.forecast);

    Ok((config, Mgr { open_meteo }))
}
