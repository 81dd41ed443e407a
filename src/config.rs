//! Engine configuration file support.
//!
//! This module provides the generator tuning knobs, operating-hours range,
//! and the facility/member-tier catalogs, with utilities for reading them
//! from TOML configuration files. The serde defaults reproduce the demand
//! model the dashboard prototype shipped with.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::calendar::HourWindow;

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "COURTMETRICS_CONFIG";

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("no courtmetrics.toml found in standard locations")]
    NotFound,
}

/// Additive and noise parameters of the usage model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorTuning {
    /// Starting usage value before bonuses and multipliers
    #[serde(default = "default_base_usage")]
    pub base_usage: f64,
    /// Added when the hour falls in a prime-time window
    #[serde(default = "default_prime_time_bonus")]
    pub prime_time_bonus: f64,
    /// Added on Saturday and Sunday
    #[serde(default = "default_weekend_bonus")]
    pub weekend_bonus: f64,
    /// Uniform noise amplitude; the sample is drawn from ±this value
    #[serde(default = "default_noise_amplitude")]
    pub noise_amplitude: f64,
}

fn default_base_usage() -> f64 {
    25.0
}

fn default_prime_time_bonus() -> f64 {
    45.0
}

fn default_weekend_bonus() -> f64 {
    25.0
}

fn default_noise_amplitude() -> f64 {
    15.0
}

impl Default for GeneratorTuning {
    fn default() -> Self {
        Self {
            base_usage: default_base_usage(),
            prime_time_bonus: default_prime_time_bonus(),
            weekend_bonus: default_weekend_bonus(),
            noise_amplitude: default_noise_amplitude(),
        }
    }
}

/// Per-facility demand pattern: the busy windows and the multiplier applied
/// inside and outside of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityConfig {
    pub name: String,
    /// Hours where this facility sees elevated demand
    pub busy_windows: Vec<HourWindow>,
    /// Multiplier applied when the hour is inside a busy window
    pub busy_multiplier: f64,
    /// Multiplier applied otherwise
    pub idle_multiplier: f64,
}

impl FacilityConfig {
    /// The multiplier in effect for a given hour.
    pub fn multiplier_for(&self, hour: u8) -> f64 {
        if self.busy_windows.iter().any(|w| w.contains(hour)) {
            self.busy_multiplier
        } else {
            self.idle_multiplier
        }
    }
}

/// Daytime-window multiplier override for a member tier (Family Plan uses
/// a lower multiplier during family hours).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaytimeOverride {
    pub window: HourWindow,
    pub multiplier: f64,
}

/// Per-tier demand multiplier, optionally time-dependent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierConfig {
    pub name: String,
    pub multiplier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daytime_override: Option<DaytimeOverride>,
}

impl TierConfig {
    /// The multiplier in effect for a given hour.
    pub fn multiplier_for(&self, hour: u8) -> f64 {
        match &self.daytime_override {
            Some(over) if over.window.contains(hour) => over.multiplier,
            _ => self.multiplier,
        }
    }
}

/// Engine configuration: generator tuning, operating hours, and catalogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub generator: GeneratorTuning,
    #[serde(default = "default_operating_hours")]
    pub operating_hours: HourWindow,
    #[serde(default = "default_facilities")]
    pub facilities: Vec<FacilityConfig>,
    #[serde(default = "default_tiers")]
    pub tiers: Vec<TierConfig>,
}

fn default_operating_hours() -> HourWindow {
    HourWindow::new(6, 22)
}

fn default_facilities() -> Vec<FacilityConfig> {
    vec![
        FacilityConfig {
            name: "Basketball Courts".to_string(),
            busy_windows: vec![HourWindow::new(18, 21)],
            busy_multiplier: 1.2,
            idle_multiplier: 1.0,
        },
        FacilityConfig {
            name: "Soccer Fields".to_string(),
            busy_windows: vec![HourWindow::new(16, 20)],
            busy_multiplier: 1.3,
            idle_multiplier: 0.9,
        },
        FacilityConfig {
            name: "Volleyball Courts".to_string(),
            busy_windows: vec![HourWindow::new(17, 20)],
            busy_multiplier: 1.1,
            idle_multiplier: 0.8,
        },
        FacilityConfig {
            name: "Player Lab".to_string(),
            busy_windows: vec![HourWindow::new(7, 10), HourWindow::new(18, 21)],
            busy_multiplier: 1.5,
            idle_multiplier: 0.7,
        },
        FacilityConfig {
            name: "Fitness Center".to_string(),
            busy_windows: vec![HourWindow::new(6, 9), HourWindow::new(17, 20)],
            busy_multiplier: 1.4,
            idle_multiplier: 0.9,
        },
    ]
}

fn default_tiers() -> Vec<TierConfig> {
    vec![
        TierConfig {
            name: "Venture North Club".to_string(),
            multiplier: 1.6,
            daytime_override: None,
        },
        TierConfig {
            name: "All-Access".to_string(),
            multiplier: 1.2,
            daytime_override: None,
        },
        TierConfig {
            name: "Family Plan".to_string(),
            multiplier: 1.1,
            daytime_override: Some(DaytimeOverride {
                window: HourWindow::new(9, 15),
                multiplier: 0.9,
            }),
        },
        TierConfig {
            name: "Basic Member".to_string(),
            multiplier: 0.7,
            daytime_override: None,
        },
    ]
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorTuning::default(),
            operating_hours: default_operating_hours(),
            facilities: default_facilities(),
            tiers: default_tiers(),
        }
    }
}

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: EngineConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load engine configuration from the default location.
    ///
    /// The `COURTMETRICS_CONFIG` environment variable takes precedence;
    /// otherwise `courtmetrics.toml` is searched in the current directory,
    /// a `config/` subdirectory, and the parent directory.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("courtmetrics.toml"),
            PathBuf::from("config/courtmetrics.toml"),
            PathBuf::from("../courtmetrics.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// All hours of the operating range, ascending.
    pub fn hour_axis(&self) -> Vec<u8> {
        self.operating_hours.hours()
    }

    pub fn facility_names(&self) -> Vec<String> {
        self.facilities.iter().map(|f| f.name.clone()).collect()
    }

    pub fn tier_names(&self) -> Vec<String> {
        self.tiers.iter().map(|t| t.name.clone()).collect()
    }

    /// Look up a facility by name (exact match).
    pub fn facility(&self, name: &str) -> Option<&FacilityConfig> {
        self.facilities.iter().find(|f| f.name == name)
    }

    /// Look up a member tier by name (exact match).
    pub fn tier(&self, name: &str) -> Option<&TierConfig> {
        self.tiers.iter().find(|t| t.name == name)
    }

    /// Validate the configuration, failing fast on inconsistent settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.operating_hours.start > self.operating_hours.end {
            return Err(ConfigError::Invalid(format!(
                "operating hours start ({}) after end ({})",
                self.operating_hours.start, self.operating_hours.end
            )));
        }
        if self.operating_hours.end > 23 {
            return Err(ConfigError::Invalid(format!(
                "operating hours end ({}) past 23",
                self.operating_hours.end
            )));
        }
        if self.generator.noise_amplitude < 0.0 {
            return Err(ConfigError::Invalid(
                "noise amplitude must be non-negative".to_string(),
            ));
        }
        if self.facilities.is_empty() {
            return Err(ConfigError::Invalid(
                "facility catalog is empty".to_string(),
            ));
        }
        if self.tiers.is_empty() {
            return Err(ConfigError::Invalid("tier catalog is empty".to_string()));
        }

        let mut seen = std::collections::HashSet::new();
        for facility in &self.facilities {
            if !seen.insert(facility.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate facility name: {}",
                    facility.name
                )));
            }
            if facility.busy_multiplier <= 0.0 || facility.idle_multiplier <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "facility '{}' has a non-positive multiplier",
                    facility.name
                )));
            }
            for window in &facility.busy_windows {
                if window.start > window.end {
                    return Err(ConfigError::Invalid(format!(
                        "facility '{}' has an inverted busy window ({}-{})",
                        facility.name, window.start, window.end
                    )));
                }
            }
        }

        let mut seen = std::collections::HashSet::new();
        for tier in &self.tiers {
            if !seen.insert(tier.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate tier name: {}",
                    tier.name
                )));
            }
            if tier.multiplier <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "tier '{}' has a non-positive multiplier",
                    tier.name
                )));
            }
            if let Some(over) = &tier.daytime_override {
                if over.multiplier <= 0.0 {
                    return Err(ConfigError::Invalid(format!(
                        "tier '{}' has a non-positive daytime multiplier",
                        tier.name
                    )));
                }
                if over.window.start > over.window.end {
                    return Err(ConfigError::Invalid(format!(
                        "tier '{}' has an inverted daytime window ({}-{})",
                        tier.name, over.window.start, over.window.end
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        config.validate().unwrap();

        assert_eq!(config.hour_axis().len(), 17);
        assert_eq!(config.facilities.len(), 5);
        assert_eq!(config.tiers.len(), 4);
    }

    #[test]
    fn test_default_facility_multipliers() {
        let config = EngineConfig::default();

        let basketball = config.facility("Basketball Courts").unwrap();
        assert_eq!(basketball.multiplier_for(19), 1.2);
        assert_eq!(basketball.multiplier_for(12), 1.0);

        // Player Lab is busy in both the morning and evening windows
        let lab = config.facility("Player Lab").unwrap();
        assert_eq!(lab.multiplier_for(8), 1.5);
        assert_eq!(lab.multiplier_for(19), 1.5);
        assert_eq!(lab.multiplier_for(13), 0.7);
    }

    #[test]
    fn test_family_plan_daytime_override() {
        let config = EngineConfig::default();
        let family = config.tier("Family Plan").unwrap();

        assert_eq!(family.multiplier_for(9), 0.9);
        assert_eq!(family.multiplier_for(15), 0.9);
        assert_eq!(family.multiplier_for(8), 1.1);
        assert_eq!(family.multiplier_for(19), 1.1);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let toml = r#"
[operating_hours]
start = 8
end = 20
"#;
        let config: EngineConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.operating_hours, HourWindow::new(8, 20));
        assert_eq!(config.generator.base_usage, 25.0);
        assert_eq!(config.facilities.len(), 5);
    }

    #[test]
    fn test_parse_custom_catalog() {
        let toml = r#"
[[facilities]]
name = "Climbing Wall"
busy_windows = [{ start = 17, end = 21 }]
busy_multiplier = 1.3
idle_multiplier = 0.8

[[tiers]]
name = "Day Pass"
multiplier = 0.6
"#;
        let config: EngineConfig = toml::from_str(toml).unwrap();
        config.validate().unwrap();

        assert_eq!(config.facility_names(), vec!["Climbing Wall"]);
        assert_eq!(config.tier_names(), vec!["Day Pass"]);
        assert_eq!(config.facility("Climbing Wall").unwrap().multiplier_for(18), 1.3);
    }

    #[test]
    fn test_validate_rejects_inverted_operating_hours() {
        let mut config = EngineConfig::default();
        config.operating_hours = HourWindow::new(22, 6);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_facility() {
        let mut config = EngineConfig::default();
        let duplicate = config.facilities[0].clone();
        config.facilities.push(duplicate);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_noise() {
        let mut config = EngineConfig::default();
        config.generator.noise_amplitude = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_round_trip() {
        let config = EngineConfig::default();
        let serialized = toml::to_string(&config).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serialized.as_bytes()).unwrap();

        let loaded = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded.facility_names(), config.facility_names());
        assert_eq!(loaded.operating_hours, config.operating_hours);
    }

    #[test]
    fn test_from_file_missing_path() {
        let result = EngineConfig::from_file("/nonexistent/courtmetrics.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not valid toml [[[").unwrap();

        let result = EngineConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
