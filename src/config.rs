use std::fs;
use std::path::{Path, PathBuf};
use log::Level::{Info, Warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::config_log;
use crate::dial::{DialSpan, LabelSet, TimeLabel};
use crate::ui::theme::Theme;

pub const DEFAULT_CONFIG_PATH: &str = "assets/dial.yml";
pub const CONFIG_PATH_ENV: &str = "UV_DIAL_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid dial span: start {start_angle_deg}°, sweep {sweep_deg}° (sweep must be in (0, 360])")]
    InvalidSpan { start_angle_deg: f32, sweep_deg: f32 },

    #[error("Invalid label radius ratio {0} (must be positive)")]
    InvalidLabelRadius(f32),

    #[error("Invalid hour {hour} for label {text:?} (must be in [0, 24))")]
    InvalidLabelHour { hour: f32, text: String },
}

/// Everything that shapes the dial on screen. Every field may be omitted.
///
/// span:
///   start_angle_deg: 225.0
///   sweep_deg: 270.0
/// labels: three_hourly          # quarters | three_hourly | !custom [{hour: 12, text: Noon}]
/// label_radius_ratio: 0.72
/// theme: { ... }                # see `Theme`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    pub span: DialSpan,
    pub labels: LabelSet,
    /// Label distance from the center, as a fraction of the dial radius.
    pub label_radius_ratio: f32,
    pub theme: Theme,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            span: DialSpan::default(),
            labels: LabelSet::default(),
            label_radius_ratio: 0.72,
            theme: Theme::default(),
        }
    }
}

impl DialConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: DialConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.span.is_valid() {
            return Err(ConfigError::InvalidSpan {
                start_angle_deg: self.span.start_angle_deg,
                sweep_deg: self.span.sweep_deg,
            });
        }
        if !(self.label_radius_ratio > 0.0) {
            return Err(ConfigError::InvalidLabelRadius(self.label_radius_ratio));
        }
        if let LabelSet::Custom(labels) = &self.labels {
            if let Some(TimeLabel { hour, text }) = labels.iter().find(|l| !(0.0..24.0).contains(&l.hour)) {
                return Err(ConfigError::InvalidLabelHour { hour: *hour, text: text.clone() });
            }
        }
        Ok(())
    }

    /// Loads the config from `$UV_DIAL_CONFIG` or `assets/dial.yml`, falling back to
    /// defaults when the file is missing or invalid.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        if !Path::new(&path).exists() {
            config_log!(Info, "No dial config at {}, using defaults", path);
            return Self::default();
        }
        match Self::from_yaml_file(&path) {
            Ok(config) => {
                config_log!(Info, "Loaded dial config from {}", path);
                config
            }
            Err(e) => {
                config_log!(Warn, "{}; using defaults", e);
                Self::default()
            }
        }
    }
}
