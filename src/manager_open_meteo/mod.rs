pub mod errors;

use std::time::Duration;
use log::{debug, info};
use serde_json::Value;
use ureq::Agent;
use crate::config::ForecastParameters;
use crate::manager_open_meteo::errors::OpenMeteoError;
use crate::models::forecast::{ForecastEncoding, ForecastVariable};
use crate::models::open_meteo_forecast::FullForecast;

/// Struct for fetching hourly weather forecasts from Open-Meteo
pub struct OpenMeteo {
    agent: Agent,
    base_url: String,
    lat: f64,
    long: f64,
    variables: Vec<String>,
    timezone: Option<String>,
    default_interval: i64,
}

impl OpenMeteo {
    /// Returns an OpenMeteo struct ready for fetching forecasts for the given point
    ///
    /// Open-Meteo rounds coordinates to a grid cell anyway, so lat/long are sent
    /// with 4 decimals
    ///
    /// # Arguments
    ///
    /// * 'lat' - latitude for the point to get forecasts for
    /// * 'long' - longitude for the point to get forecasts for
    /// * 'params' - forecast parameters such as requested variables and timeout
    pub fn new(lat: f64, long: f64, params: &ForecastParameters) -> OpenMeteo {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(params.timeout_secs)))
            .build();

        let agent = config.into();

        Self {
            agent,
            base_url: params.base_url.clone(),
            lat,
            long,
            variables: params.variables.clone(),
            timezone: params.timezone.clone(),
            default_interval: params.default_interval_seconds,
        }
    }

    /// Retrieves an hourly forecast and decodes it into a forecast encoding with one
    /// variable per configured forecast variable, in the configured order.
    ///
    /// Open-Meteo reports a zero utc offset unless a timezone is asked for
    ///
    pub fn new_forecast(&self) -> Result<ForecastEncoding, OpenMeteoError> {
        info!("fetching forecast for lat {:0.4}, long {:0.4}", self.lat, self.long);

        let mut request = self.agent
            .get(&self.base_url)
            .query("latitude", format!("{:0.4}", self.lat))
            .query("longitude", format!("{:0.4}", self.long))
            .query("hourly", self.variables.join(","))
            .query("timeformat", "unixtime");
        if let Some(timezone) = &self.timezone {
            request = request.query("timezone", timezone);
        }

        let json = request
            .call()?
            .body_mut()
            .read_to_string()?;

        decode_forecast(&json, &self.variables, self.default_interval)
    }
}

/// Decodes an Open-Meteo json document into a forecast encoding.
///
/// The time column is only used to find start, interval and end, it must hence be evenly
/// spaced. Null values are decoded as NaN.
///
/// # Arguments
///
/// * 'json' - the document as returned by Open-Meteo
/// * 'variables' - variables to pick from the document, in wanted order
/// * 'default_interval' - interval to use when the time column has fewer than two entries
pub fn decode_forecast(json: &str, variables: &[String], default_interval: i64) -> Result<ForecastEncoding, OpenMeteoError> {
    let forecast: FullForecast = serde_json::from_str(json)?;
    debug!("forecast grid cell lat {}, long {}, timezone {}",
        forecast.latitude, forecast.longitude, forecast.timezone.as_deref().unwrap_or("GMT"));

    let mut hourly = forecast.hourly
        .ok_or(OpenMeteoError::Document("no hourly data in forecast".to_string()))?;

    let start_instant = *hourly.time.first()
        .ok_or(OpenMeteoError::Document("empty time column in forecast".to_string()))?;

    let interval_seconds = match hourly.time.get(1) {
        Some(t) => t.checked_sub(start_instant)
            .ok_or(OpenMeteoError::Document("time column step out of range".to_string()))?,
        None => default_interval,
    };
    if interval_seconds <= 0 {
        return Err(OpenMeteoError::Document(format!("non increasing time column: step {}", interval_seconds)));
    }
    if hourly.time.windows(2).any(|w| w[1].checked_sub(w[0]) != Some(interval_seconds)) {
        return Err(OpenMeteoError::Document("unevenly spaced time column".to_string()));
    }

    let end_instant = i64::try_from(hourly.time.len()).ok()
        .and_then(|len| len.checked_mul(interval_seconds))
        .and_then(|span| start_instant.checked_add(span))
        .ok_or(OpenMeteoError::Document("time column ends out of range".to_string()))?;

    let mut result = Vec::with_capacity(variables.len());
    for name in variables {
        let column = hourly.variables
            .remove(name)
            .ok_or(OpenMeteoError::Document(format!("variable {} missing in forecast", name)))?;

        result.push(ForecastVariable {
            name: name.clone(),
            values: column_values(name, column)?,
        });
    }

    Ok(ForecastEncoding {
        start_instant,
        end_instant,
        interval_seconds,
        utc_offset_seconds: forecast.utc_offset_seconds,
        variables: result,
    })
}

/// Converts a json column to values, null is decoded as NaN
///
/// # Arguments
///
/// * 'name' - variable name, used in errors
/// * 'column' - the json column
fn column_values(name: &str, column: Value) -> Result<Vec<f64>, OpenMeteoError> {
    let Value::Array(items) = column else {
        return Err(OpenMeteoError::Document(format!("variable {} is not an array", name)));
    };

    items
        .iter()
        .map(|v| match v {
            Value::Null => Ok(f64::NAN),
            _ => v.as_f64()
                .ok_or(OpenMeteoError::Document(format!("variable {} holds non numeric value {}", name, v))),
        })
        .collect()
}
