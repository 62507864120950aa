//! Dashboard configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::war::{default_war_periods, validate_war_periods, WarPeriod};

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "OLYMPIA_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "olympia.json";

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Inclusive range of years covered by the slider and the year axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    pub fn span(&self) -> i32 {
        self.end - self.start
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::new(1896, 2016)
    }
}

/// Chart transition durations in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Stat range chart while the slider is dragged
    pub stat_dragging_ms: u64,

    /// Medals chart while the slider is dragged
    pub medals_dragging_ms: u64,

    /// Stat range and medals charts otherwise
    pub idle_ms: u64,

    /// Sport line chart, always
    pub sport_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            stat_dragging_ms: 50,
            medals_dragging_ms: 100,
            idle_ms: 400,
            sport_ms: 300,
        }
    }
}

/// Dashboard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV file with athlete records
    pub data_path: PathBuf,

    /// Supported year range
    pub year_range: YearRange,

    /// Animation tick period
    pub animation_speed_ms: u64,

    /// Number of teams shown on the medals chart
    pub top_countries: usize,

    /// Gaps without Games, sorted
    pub war_periods: Vec<WarPeriod>,

    pub transitions: TransitionConfig,

    /// Years of padding on each side of the stat chart x axis
    pub year_axis_padding: i32,

    pub dark_mode: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("olympics_cleaned.csv"),
            year_range: YearRange::default(),
            animation_speed_ms: 150,
            top_countries: 15,
            war_periods: default_war_periods(),
            transitions: TransitionConfig::default(),
            year_axis_padding: 4,
            dark_mode: false,
        }
    }
}

impl DashboardConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config JSON; missing fields take their defaults
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Config path from [`CONFIG_ENV_VAR`], or [`DEFAULT_CONFIG_FILE`]
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.year_range.start >= self.year_range.end {
            return Err(ConfigError::Invalid(format!(
                "year range {}..{} is empty",
                self.year_range.start, self.year_range.end
            )));
        }
        if self.animation_speed_ms == 0 {
            return Err(ConfigError::Invalid(
                "animation_speed_ms must be positive".to_string(),
            ));
        }
        if self.top_countries == 0 {
            return Err(ConfigError::Invalid(
                "top_countries must be positive".to_string(),
            ));
        }
        validate_war_periods(&self.war_periods)
    }

    pub fn animation_period(&self) -> Duration {
        Duration::from_millis(self.animation_speed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.year_range, YearRange::new(1896, 2016));
        assert_eq!(config.animation_period(), Duration::from_millis(150));
        assert_eq!(config.top_countries, 15);
        assert_eq!(config.transitions.sport_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{ "animation_speed_ms": 80 }"#).unwrap();
        assert_eq!(config.animation_speed_ms, 80);
        assert_eq!(config.war_periods, default_war_periods());
        assert_eq!(config.data_path, PathBuf::from("olympics_cleaned.csv"));
    }

    #[test]
    fn test_invalid_json_values_rejected() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{ "animation_speed_ms": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{ "year_range": { "start": 2016, "end": 1896 } }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            DashboardConfig::from_json("not json"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = DashboardConfig::load_or_default(Path::new("/nonexistent/olympia.json"));
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_year_range() {
        let range = YearRange::default();
        assert!(range.contains(1896));
        assert!(range.contains(2016));
        assert!(!range.contains(2020));
        assert_eq!(range.span(), 120);
    }
}
