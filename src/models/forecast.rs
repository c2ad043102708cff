use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One named, flat value array of a forecast encoding
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ForecastVariable {
    pub name: String,
    pub values: Vec<f64>,
}

/// Compact encoding of a forecast time series, the time axis is given as boundaries and
/// a step rather than as an explicit list of timestamps
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ForecastEncoding {
    /// Inclusive lower bound, seconds since epoch
    pub start_instant: i64,
    /// Exclusive upper bound, seconds since epoch
    pub end_instant: i64,
    pub interval_seconds: i64,
    pub utc_offset_seconds: i64,
    pub variables: Vec<ForecastVariable>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SampleValue {
    pub name: String,
    pub value: Option<f64>,
}

/// One step of a reconstructed forecast
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ForecastSample {
    /// Offset corrected instant in seconds
    pub timestamp: i64,
    /// Values in variable declaration order, None marks a missing value
    pub values: Vec<SampleValue>,
}

impl ForecastSample {
    /// Returns the value entry for the given variable, if the variable is part of the sample
    ///
    /// # Arguments
    ///
    /// * 'name' - variable name, e.g. temperature_2m
    pub fn get(&self, name: &str) -> Option<&SampleValue> {
        self.values.iter().find(|v| v.name == name)
    }

    /// Returns the timestamp as a chrono date time, None if it is out of chrono's range
    ///
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}
