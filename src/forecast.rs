pub mod severity;
pub mod sample_data;

#[cfg(feature = "mock_forecast")]
pub mod mock;

use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};
use log::Level::{Debug, Warn};
use crate::forecast_log;
use self::severity::SeverityBucket;

/// A forecast entry as handed over by a data source, before the timestamp is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    pub timestamp: String,
    pub uv_index: f32,
}

impl RawSample {
    pub fn new(timestamp: impl Into<String>, uv_index: f32) -> Self {
        Self { timestamp: timestamp.into(), uv_index }
    }
}

/// One parsed UV forecast point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastSample {
    pub timestamp: NaiveDateTime,
    pub uv_index: f32,
}

impl ForecastSample {
    /// Hour of day plus minutes as a fraction, in [0, 24).
    pub fn fractional_hour(&self) -> f32 {
        self.timestamp.hour() as f32 + self.timestamp.minute() as f32 / 60.0
    }

    pub fn bucket(&self) -> SeverityBucket {
        SeverityBucket::from_uv(self.uv_index)
    }
}

/// Supplies the samples a dial is built from.
pub trait ForecastSource {
    fn name(&self) -> &str;
    fn raw_samples(&self) -> Vec<RawSample>;
}

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parses a forecast timestamp. RFC 3339 offsets are dropped and the wall-clock time kept.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

/// Converts raw samples, dropping entries with an unparseable timestamp or an
/// unusable UV value. Input order is preserved.
pub fn parse_samples(raw: &[RawSample]) -> Vec<ForecastSample> {
    let mut samples = Vec::with_capacity(raw.len());
    for entry in raw {
        let Some(timestamp) = parse_timestamp(&entry.timestamp) else {
            forecast_log!(Warn, "Skipping sample with unparseable timestamp {:?}", entry.timestamp);
            continue;
        };
        if !entry.uv_index.is_finite() || entry.uv_index < 0.0 {
            forecast_log!(Warn, "Skipping sample at {} with invalid UV index {}", timestamp, entry.uv_index);
            continue;
        }
        samples.push(ForecastSample { timestamp, uv_index: entry.uv_index });
    }
    forecast_log!(Debug, "Parsed {} of {} forecast samples", samples.len(), raw.len());
    samples
}

/// The value shown as the dial's numeric reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvReading {
    pub uv_index: f32,
    pub bucket: SeverityBucket,
}

impl From<&ForecastSample> for UvReading {
    fn from(sample: &ForecastSample) -> Self {
        Self { uv_index: sample.uv_index, bucket: sample.bucket() }
    }
}

/// A day of parsed samples, ordered by time.
#[derive(Debug, Clone, Default)]
pub struct DayForecast {
    samples: Vec<ForecastSample>,
}

impl DayForecast {
    pub fn new(mut samples: Vec<ForecastSample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        Self { samples }
    }

    pub fn from_source(source: &dyn ForecastSource) -> Self {
        let raw = source.raw_samples();
        forecast_log!(Debug, "Loading {} raw samples from {}", raw.len(), source.name());
        Self::new(parse_samples(&raw))
    }

    pub fn samples(&self) -> &[ForecastSample] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Latest sample at or before `time`; the first sample when `time` precedes them all.
    pub fn reading_at(&self, time: NaiveTime) -> Option<UvReading> {
        self.samples
            .iter()
            .take_while(|s| s.timestamp.time() <= time)
            .last()
            .or_else(|| self.samples.first())
            .map(UvReading::from)
    }

    pub fn peak(&self) -> Option<UvReading> {
        self.samples
            .iter()
            .max_by(|a, b| a.uv_index.total_cmp(&b.uv_index))
            .map(UvReading::from)
    }
}
