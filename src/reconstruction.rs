use log::warn;
use thiserror::Error;
use crate::models::forecast::{ForecastEncoding, ForecastSample, ForecastVariable, SampleValue};

#[derive(Error, Debug, PartialEq)]
pub enum ReconstructError {
    #[error("invalid interval: {0} seconds, must be greater than zero")]
    InvalidInterval(i64),
    #[error("timestamp at step {0} can't be represented as seconds since epoch")]
    TimestampOverflow(usize),
}

/// A variable holding fewer values than the time axis has steps
#[derive(Error, Debug, Clone, PartialEq)]
#[error("variable {name} is truncated: {available} values available, {expected} expected")]
pub struct TruncatedVariable {
    pub name: String,
    pub available: usize,
    pub expected: usize,
}

/// Returns the number of whole intervals between start (inclusive) and end (exclusive).
/// A trailing partial interval is dropped and an empty or inverted range gives zero.
///
/// # Arguments
///
/// * 'start' - first instant in seconds
/// * 'end' - exclusive upper bound in seconds
/// * 'interval' - step in seconds, must be greater than zero
pub fn step_count(start: i64, end: i64, interval: i64) -> usize {
    if end <= start || interval <= 0 {
        return 0;
    }

    let span = end as i128 - start as i128;
    usize::try_from(span / interval as i128).unwrap_or(usize::MAX)
}

/// Lists all variables in the encoding that can't fill every step of the time axis
///
/// # Arguments
///
/// * 'encoding' - the forecast encoding to check
pub fn truncated_variables(encoding: &ForecastEncoding) -> Vec<TruncatedVariable> {
    let expected = step_count(encoding.start_instant, encoding.end_instant, encoding.interval_seconds);

    encoding.variables
        .iter()
        .filter(|v| v.values.len() < expected)
        .map(|v| TruncatedVariable {
            name: v.name.clone(),
            available: v.values.len(),
            expected,
        })
        .collect()
}

/// Reconstructs the explicit, offset corrected time axis of a forecast encoding and aligns
/// every variable's values against it.
///
/// The number of samples only depends on the start, end and interval of the encoding.
/// Variables with too few values are filled with None for the steps they can't cover,
/// and the same goes for NaN values, so the result is always complete in length.
///
/// # Arguments
///
/// * 'encoding' - the forecast encoding to reconstruct
pub fn reconstruct(encoding: &ForecastEncoding) -> Result<Vec<ForecastSample>, ReconstructError> {
    if encoding.interval_seconds <= 0 {
        return Err(ReconstructError::InvalidInterval(encoding.interval_seconds));
    }

    for t in truncated_variables(encoding) {
        warn!("{}", t);
    }

    let count = step_count(encoding.start_instant, encoding.end_instant, encoding.interval_seconds);

    // timestamps are monotonic, checking both ends covers every step
    for k in [0, count.saturating_sub(1)] {
        if count > 0 && corrected_instant(encoding, k).is_none() {
            return Err(ReconstructError::TimestampOverflow(k));
        }
    }

    (0..count)
        .map(|k| {
            let timestamp = corrected_instant(encoding, k)
                .ok_or(ReconstructError::TimestampOverflow(k))?;
            Ok(ForecastSample {
                timestamp,
                values: encoding.variables
                    .iter()
                    .map(|v| SampleValue { name: v.name.clone(), value: value_at(v, k) })
                    .collect(),
            })
        })
        .collect()
}

/// Returns start + step * interval + offset, None if it doesn't fit in an i64
///
/// # Arguments
///
/// * 'encoding' - the forecast encoding
/// * 'step' - step index
fn corrected_instant(encoding: &ForecastEncoding, step: usize) -> Option<i64> {
    let instant = encoding.start_instant as i128
        + step as i128 * encoding.interval_seconds as i128
        + encoding.utc_offset_seconds as i128;

    i64::try_from(instant).ok()
}

/// Returns the value at the given step, None if it is beyond the array or not a number
///
/// # Arguments
///
/// * 'variable' - the variable to read from
/// * 'step' - step index
fn value_at(variable: &ForecastVariable, step: usize) -> Option<f64> {
    variable.values
        .get(step)
        .copied()
        .filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoding(start: i64, end: i64, interval: i64, offset: i64, variables: Vec<(&str, Vec<f64>)>) -> ForecastEncoding {
        ForecastEncoding {
            start_instant: start,
            end_instant: end,
            interval_seconds: interval,
            utc_offset_seconds: offset,
            variables: variables
                .into_iter()
                .map(|(name, values)| ForecastVariable { name: name.to_string(), values })
                .collect(),
        }
    }

    fn temp(sample: &ForecastSample) -> Option<f64> {
        sample.get("temperature_2m").and_then(|v| v.value)
    }

    #[test]
    fn two_hourly_samples() {
        let e = encoding(0, 7200, 3600, 0, vec![("temperature_2m", vec![10.0, 12.5])]);
        let samples = reconstruct(&e).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].timestamp, 0);
        assert_eq!(temp(&samples[0]), Some(10.0));
        assert_eq!(samples[1].timestamp, 3600);
        assert_eq!(temp(&samples[1]), Some(12.5));
    }

    #[test]
    fn offset_shifts_timestamps_only() {
        let e = encoding(0, 7200, 3600, 3600, vec![("temperature_2m", vec![10.0, 12.5])]);
        let samples = reconstruct(&e).unwrap();

        let stamps = samples.iter().map(|s| s.timestamp).collect::<Vec<i64>>();
        assert_eq!(stamps, vec![3600, 7200]);
        assert_eq!(temp(&samples[0]), Some(10.0));
        assert_eq!(temp(&samples[1]), Some(12.5));
    }

    #[test]
    fn empty_when_end_equals_start() {
        let e = encoding(7200, 7200, 3600, 0, vec![("temperature_2m", vec![1.0])]);
        assert!(reconstruct(&e).unwrap().is_empty());
    }

    #[test]
    fn empty_when_end_before_start() {
        let e = encoding(7200, 0, 3600, 0, vec![("temperature_2m", vec![1.0, 2.0])]);
        assert!(reconstruct(&e).unwrap().is_empty());
        assert!(truncated_variables(&e).is_empty());
    }

    #[test]
    fn trailing_partial_step_is_dropped() {
        let e = encoding(0, 5400, 3600, 0, vec![("temperature_2m", vec![1.0, 2.0])]);
        let samples = reconstruct(&e).unwrap();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].timestamp, 0);
        assert_eq!(temp(&samples[0]), Some(1.0));
    }

    #[test]
    fn truncated_variable_is_filled_with_missing() {
        let e = encoding(0, 7200, 3600, 0, vec![("temperature_2m", vec![10.0])]);
        let samples = reconstruct(&e).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(temp(&samples[0]), Some(10.0));
        assert_eq!(samples[1].get("temperature_2m").map(|v| v.value), Some(None));

        assert_eq!(truncated_variables(&e), vec![TruncatedVariable {
            name: "temperature_2m".to_string(),
            available: 1,
            expected: 2,
        }]);
    }

    #[test]
    fn truncation_does_not_affect_other_variables() {
        let e = encoding(0, 10800, 3600, 0, vec![
            ("temperature_2m", vec![1.0, 2.0, 3.0]),
            ("cloud_cover", vec![50.0]),
        ]);
        let samples = reconstruct(&e).unwrap();

        assert_eq!(samples.iter().map(temp).collect::<Vec<_>>(), vec![Some(1.0), Some(2.0), Some(3.0)]);
        let clouds = samples
            .iter()
            .map(|s| s.get("cloud_cover").and_then(|v| v.value))
            .collect::<Vec<_>>();
        assert_eq!(clouds, vec![Some(50.0), None, None]);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let e = encoding(0, 7200, 0, 0, vec![("temperature_2m", vec![10.0, 12.5])]);
        assert_eq!(reconstruct(&e), Err(ReconstructError::InvalidInterval(0)));
    }

    #[test]
    fn negative_interval_is_rejected() {
        let e = encoding(7200, 0, -3600, 0, vec![]);
        assert_eq!(reconstruct(&e), Err(ReconstructError::InvalidInterval(-3600)));
    }

    #[test]
    fn no_variables_gives_empty_values() {
        let e = encoding(0, 10800, 3600, 0, vec![]);
        let samples = reconstruct(&e).unwrap();

        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|s| s.values.is_empty()));
    }

    #[test]
    fn negative_offset_is_not_clamped() {
        let e = encoding(0, 7200, 3600, -7200, vec![("temperature_2m", vec![1.0, 2.0])]);
        let samples = reconstruct(&e).unwrap();

        assert_eq!(samples[0].timestamp, -7200);
        assert_eq!(samples[1].timestamp, -3600);
    }

    #[test]
    fn nan_is_exposed_as_missing() {
        let e = encoding(0, 7200, 3600, 0, vec![("temperature_2m", vec![f64::NAN, 4.0])]);
        let samples = reconstruct(&e).unwrap();

        assert_eq!(temp(&samples[0]), None);
        assert_eq!(temp(&samples[1]), Some(4.0));
        assert!(truncated_variables(&e).is_empty());
    }

    #[test]
    fn values_keep_declaration_order() {
        let e = encoding(0, 3600, 3600, 0, vec![
            ("wind_speed_10m", vec![3.0]),
            ("temperature_2m", vec![1.0]),
            ("cloud_cover", vec![2.0]),
        ]);
        let samples = reconstruct(&e).unwrap();

        let names = samples[0].values.iter().map(|v| v.name.as_str()).collect::<Vec<&str>>();
        assert_eq!(names, vec!["wind_speed_10m", "temperature_2m", "cloud_cover"]);
    }

    #[test]
    fn length_and_spacing_hold_over_many_encodings() {
        let starts = [-86400, -1, 0, 1_700_000_000];
        let spans = [-7200, 0, 1, 899, 900, 3599, 3600, 5400, 86400, 86401];
        let intervals = [1, 7, 900, 3600, 10800];
        let offsets = [-43200, 0, 19800];

        for start in starts {
            for span in spans {
                for interval in intervals {
                    for offset in offsets {
                        let e = encoding(start, start + span, interval, offset, vec![("t", vec![0.5; 4])]);
                        let samples = reconstruct(&e).unwrap();

                        let expected = if span > 0 { (span / interval) as usize } else { 0 };
                        assert_eq!(samples.len(), expected, "start {} span {} interval {}", start, span, interval);

                        if let Some(first) = samples.first() {
                            assert_eq!(first.timestamp, start + offset);
                        }
                        for pair in samples.windows(2) {
                            assert_eq!(pair[1].timestamp - pair[0].timestamp, interval);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn reconstruction_is_repeatable() {
        let e = encoding(1_700_000_000, 1_700_086_400, 3600, 3600, vec![
            ("temperature_2m", (0..24).map(|h| h as f64 * 0.5).collect()),
            ("precipitation", vec![0.0; 12]),
        ]);

        assert_eq!(reconstruct(&e).unwrap(), reconstruct(&e).unwrap());
    }

    #[test]
    fn input_is_left_untouched() {
        let e = encoding(0, 7200, 3600, 0, vec![("temperature_2m", vec![10.0])]);
        let copy = e.clone();
        let _ = reconstruct(&e).unwrap();

        assert_eq!(e, copy);
    }

    #[test]
    fn overflowing_offset_is_rejected() {
        let e = encoding(i64::MAX - 3600, i64::MAX, 3600, 7200, vec![("temperature_2m", vec![1.0])]);
        assert_eq!(reconstruct(&e), Err(ReconstructError::TimestampOverflow(0)));
    }

    #[test]
    fn overflowing_negative_offset_is_rejected() {
        let e = encoding(i64::MIN, i64::MIN + 7200, 3600, -1, vec![]);
        assert_eq!(reconstruct(&e), Err(ReconstructError::TimestampOverflow(0)));
    }

    #[test]
    fn last_step_overflow_is_rejected() {
        let e = encoding(i64::MAX - 7200, i64::MAX, 3600, 3601, vec![]);
        assert_eq!(reconstruct(&e), Err(ReconstructError::TimestampOverflow(1)));
    }

    #[test]
    fn instants_near_the_limit_are_kept() {
        let e = encoding(i64::MAX - 7200, i64::MAX, 3600, 3599, vec![("temperature_2m", vec![1.0, 2.0])]);
        let samples = reconstruct(&e).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].timestamp, i64::MAX - 1);
    }

    #[test]
    fn step_count_clamps_and_truncates() {
        assert_eq!(step_count(0, 7200, 3600), 2);
        assert_eq!(step_count(0, 7199, 3600), 1);
        assert_eq!(step_count(10, 0, 3600), 0);
        assert_eq!(step_count(0, 7200, 0), 0);
        assert_eq!(step_count(i64::MIN, i64::MAX, i64::MAX), 2);
    }
}
