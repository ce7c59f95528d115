use super::{ForecastSource, RawSample};

// Hourly forecast for a clear summer day.
const SAMPLE_DAY: [(&str, f32); 17] = [
    ("2024-06-21T00:00:00", 0.0),
    ("2024-06-21T05:00:00", 0.0),
    ("2024-06-21T06:00:00", 0.3),
    ("2024-06-21T07:00:00", 0.9),
    ("2024-06-21T08:00:00", 2.1),
    ("2024-06-21T09:00:00", 3.6),
    ("2024-06-21T10:00:00", 5.4),
    ("2024-06-21T11:00:00", 7.1),
    ("2024-06-21T12:00:00", 8.3),
    ("2024-06-21T13:00:00", 8.7),
    ("2024-06-21T14:00:00", 7.9),
    ("2024-06-21T15:00:00", 6.2),
    ("2024-06-21T16:00:00", 4.4),
    ("2024-06-21T17:00:00", 2.6),
    ("2024-06-21T18:00:00", 1.1),
    ("2024-06-21T19:00:00", 0.3),
    ("2024-06-21T23:59:00", 0.0),
];

/// Compiled-in forecast used when no other source is configured.
#[derive(Debug, Default)]
pub struct StaticForecast;

impl ForecastSource for StaticForecast {
    fn name(&self) -> &str {
        "static sample day"
    }

    fn raw_samples(&self) -> Vec<RawSample> {
        SAMPLE_DAY
            .iter()
            .map(|&(timestamp, uv_index)| RawSample::new(timestamp, uv_index))
            .collect()
    }
}
