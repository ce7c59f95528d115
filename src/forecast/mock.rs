use chrono::NaiveDate;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use super::{ForecastSource, RawSample};

/// Generates a bell-shaped UV day around solar noon with some noise, one sample
/// every `step_minutes`.
pub struct SyntheticForecast {
    pub date: NaiveDate,
    pub peak_uv: f32,
    pub step_minutes: u32,
    seed: Option<u64>,
}

impl SyntheticForecast {
    pub fn new(date: NaiveDate, peak_uv: f32) -> Self {
        Self { date, peak_uv, step_minutes: 30, seed: None }
    }

    /// Fixes the noise so repeated calls yield the same day.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl ForecastSource for SyntheticForecast {
    fn name(&self) -> &str {
        "synthetic day"
    }

    fn raw_samples(&self) -> Vec<RawSample> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let step = self.step_minutes.max(1);
        let mut samples = Vec::new();
        let mut minute = 0;
        while minute < 24 * 60 {
            let hour = minute as f32 / 60.0;
            // Sun above the horizon roughly 06:00..18:00
            let daylight = ((hour - 6.0) / 12.0 * std::f32::consts::PI).sin().max(0.0);
            let noise = if daylight > 0.0 { rng.gen_range(-0.3..0.3) } else { 0.0 };
            let uv_index = (self.peak_uv * daylight * daylight + noise).max(0.0);
            let timestamp = self
                .date
                .and_hms_opt(minute / 60, minute % 60, 0)
                .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())
                .unwrap_or_default();
            samples.push(RawSample::new(timestamp, uv_index));
            minute += step;
        }
        samples
    }
}
