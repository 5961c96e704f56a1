//! Planner defaults and their JSON loading.
//!
//! # Responsibility
//! - Hold the defaults the planner applies to new entries and saved plans.
//! - Parse and validate an optional JSON override document.
//!
//! # Invariants
//! - A `PlannerConfig` returned by a loader has passed `validate()`.
//! - Missing fields fall back to `PlannerConfig::default()`; unknown fields
//!   are rejected.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Placeholder photo for entries created without an image.
pub const DEFAULT_ENTRY_IMAGE: &str =
    "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=800&auto=format&fit=crop&q=80";
/// Assumed stay at each stop when a saved plan derives end times.
pub const DEFAULT_STOP_MINUTES: u32 = 120;
/// Tokyo.
pub const DEFAULT_PREFECTURE_CODE: &str = "13";

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Planner-wide defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Image assigned to entries submitted without one.
    pub default_image: String,
    /// Stay length used to derive a stop's end time, in minutes.
    pub default_stop_minutes: u32,
    /// Prefecture code used when an entry carries none.
    pub default_prefecture_code: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_image: DEFAULT_ENTRY_IMAGE.to_string(),
            default_stop_minutes: DEFAULT_STOP_MINUTES,
            default_prefecture_code: DEFAULT_PREFECTURE_CODE.to_string(),
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Checks value-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_image.trim().is_empty() {
            return Err(ConfigError::BlankDefaultImage);
        }
        if self.default_prefecture_code.trim().is_empty() {
            return Err(ConfigError::BlankPrefectureCode);
        }
        if self.default_stop_minutes == 0 || self.default_stop_minutes >= MINUTES_PER_DAY {
            return Err(ConfigError::InvalidStopMinutes(self.default_stop_minutes));
        }
        Ok(())
    }
}

/// Errors from loading or validating planner config.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file cannot be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Document is not valid JSON or has unexpected fields.
    Parse(serde_json::Error),
    BlankDefaultImage,
    BlankPrefectureCode,
    /// Stop length must be within `1..1440` minutes.
    InvalidStopMinutes(u32),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid planner config: {err}"),
            Self::BlankDefaultImage => write!(f, "default_image must not be blank"),
            Self::BlankPrefectureCode => {
                write!(f, "default_prefecture_code must not be blank")
            }
            Self::InvalidStopMinutes(value) => write!(
                f,
                "default_stop_minutes must be between 1 and {}, got {value}",
                MINUTES_PER_DAY - 1
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}
