use std::collections::HashMap;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct HourlyData {
    pub time: Vec<i64>,
    #[serde(flatten)]
    pub variables: HashMap<String, Value>,
}

/// Open-Meteo forecast document as returned with timeformat=unixtime
#[derive(Deserialize)]
pub struct FullForecast {
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset_seconds: i64,
    #[serde(default)]
    pub timezone: Option<String>,
    pub hourly: Option<HourlyData>,
}
