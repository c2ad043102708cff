use chrono::Local;
use crate::models::forecast::ForecastSample;

/// Formats one sample as its timestamp followed by one line per variable.
/// The timestamp is the offset corrected instant printed as an ISO-8601 UTC string,
/// missing values are printed as a dash.
///
/// # Arguments
///
/// * 'sample' - the sample to format
pub fn format_sample(sample: &ForecastSample) -> String {
    let time = sample.date_time()
        .map(|d| d.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
        .unwrap_or(format!("{}s", sample.timestamp));

    let mut result = time;
    for v in &sample.values {
        let value = v.value.map_or("-".to_string(), |d| d.to_string());
        result += &format!("\n  {}: {}", v.name, value);
    }

    result
}

/// Formats a whole forecast with a caption
///
/// # Arguments
///
/// * 'samples' - the samples to format, in order
/// * 'caption' - the caption to print
pub fn format_forecast(samples: &[ForecastSample], caption: &str) -> String {
    let report_time = format!("{}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    let caption = format!("{} {} ", report_time, caption);

    let mut msg = format!("{:=<80}\n", caption);
    if samples.is_empty() {
        msg += "No forecast data\n";
    }
    for s in samples {
        msg += &format!("{}\n", format_sample(s));
    }

    msg
}

/// Prints a whole forecast with a caption
///
/// # Arguments
///
/// * 'samples' - the samples to print, in order
/// * 'caption' - the caption to print
pub fn print_forecast(samples: &[ForecastSample], caption: &str) {
    println!("{}", format_forecast(samples, caption));
}
