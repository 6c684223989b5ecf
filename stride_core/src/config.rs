//! Formula coefficients and configuration file support for Stride.
//!
//! Every number that appears in a distance, speed or calorie formula lives
//! here as a named constant and is exposed through a per-workout
//! coefficient struct. Overrides are loaded from
//! `$XDG_CONFIG_HOME/stride/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Length of a single step, in meters
pub const LEN_STEP_M: f64 = 0.65;

/// Length of a single swimming stroke, in meters
pub const SWIM_LEN_STROKE_M: f64 = 1.38;

pub const RUN_CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

pub const WLK_CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WLK_CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
/// km/h to m/s conversion factor
pub const KMH_IN_MSEC: f64 = 0.278;
pub const CM_IN_M: f64 = 100.0;

pub const SWM_CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
pub const SWM_CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Running formula coefficients
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunningCoefficients {
    #[serde(default = "default_len_step")]
    pub len_step_m: f64,

    #[serde(default = "default_run_speed_multiplier")]
    pub calories_mean_speed_multiplier: f64,

    #[serde(default = "default_run_speed_shift")]
    pub calories_mean_speed_shift: f64,
}

impl Default for RunningCoefficients {
    fn default() -> Self {
        Self {
            len_step_m: default_len_step(),
            calories_mean_speed_multiplier: default_run_speed_multiplier(),
            calories_mean_speed_shift: default_run_speed_shift(),
        }
    }
}

/// Sports walking formula coefficients
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkingCoefficients {
    #[serde(default = "default_len_step")]
    pub len_step_m: f64,

    #[serde(default = "default_wlk_weight_multiplier")]
    pub calories_weight_multiplier: f64,

    #[serde(default = "default_wlk_speed_height_multiplier")]
    pub calories_speed_height_multiplier: f64,

    #[serde(default = "default_kmh_in_msec")]
    pub kmh_in_msec: f64,

    #[serde(default = "default_cm_in_m")]
    pub cm_in_m: f64,
}

impl Default for WalkingCoefficients {
    fn default() -> Self {
        Self {
            len_step_m: default_len_step(),
            calories_weight_multiplier: default_wlk_weight_multiplier(),
            calories_speed_height_multiplier: default_wlk_speed_height_multiplier(),
            kmh_in_msec: default_kmh_in_msec(),
            cm_in_m: default_cm_in_m(),
        }
    }
}

/// Swimming formula coefficients
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwimmingCoefficients {
    #[serde(default = "default_swim_len_stroke")]
    pub len_step_m: f64,

    #[serde(default = "default_swm_speed_shift")]
    pub calories_mean_speed_shift: f64,

    #[serde(default = "default_swm_weight_multiplier")]
    pub calories_weight_multiplier: f64,
}

impl Default for SwimmingCoefficients {
    fn default() -> Self {
        Self {
            len_step_m: default_swim_len_stroke(),
            calories_mean_speed_shift: default_swm_speed_shift(),
            calories_weight_multiplier: default_swm_weight_multiplier(),
        }
    }
}

/// Coefficients for every workout type, as handed to the dispatcher
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Coefficients {
    #[serde(default)]
    pub running: RunningCoefficients,

    #[serde(default)]
    pub walking: WalkingCoefficients,

    #[serde(default)]
    pub swimming: SwimmingCoefficients,
}

impl Coefficients {
    /// Check that no coefficient would break the formulas
    ///
    /// Step lengths and the centimeter factor must be positive; everything
    /// else must be finite.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let positive = [
            ("running.len_step_m", self.running.len_step_m),
            ("walking.len_step_m", self.walking.len_step_m),
            ("walking.cm_in_m", self.walking.cm_in_m),
            ("swimming.len_step_m", self.swimming.len_step_m),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                errors.push(format!("{} must be a positive number, got {}", name, value));
            }
        }

        let finite = [
            (
                "running.calories_mean_speed_multiplier",
                self.running.calories_mean_speed_multiplier,
            ),
            (
                "running.calories_mean_speed_shift",
                self.running.calories_mean_speed_shift,
            ),
            (
                "walking.calories_weight_multiplier",
                self.walking.calories_weight_multiplier,
            ),
            (
                "walking.calories_speed_height_multiplier",
                self.walking.calories_speed_height_multiplier,
            ),
            ("walking.kmh_in_msec", self.walking.kmh_in_msec),
            (
                "swimming.calories_mean_speed_shift",
                self.swimming.calories_mean_speed_shift,
            ),
            (
                "swimming.calories_weight_multiplier",
                self.swimming.calories_weight_multiplier,
            ),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                errors.push(format!("{} must be finite, got {}", name, value));
            }
        }

        errors
    }
}

/// Application configuration
///
/// Unknown tables and keys are rejected.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub running: RunningCoefficients,

    #[serde(default)]
    pub walking: WalkingCoefficients,

    #[serde(default)]
    pub swimming: SwimmingCoefficients,
}

// Default value functions
fn default_len_step() -> f64 {
    LEN_STEP_M
}

fn default_swim_len_stroke() -> f64 {
    SWIM_LEN_STROKE_M
}

fn default_run_speed_multiplier() -> f64 {
    RUN_CALORIES_MEAN_SPEED_MULTIPLIER
}

fn default_run_speed_shift() -> f64 {
    RUN_CALORIES_MEAN_SPEED_SHIFT
}

fn default_wlk_weight_multiplier() -> f64 {
    WLK_CALORIES_WEIGHT_MULTIPLIER
}

fn default_wlk_speed_height_multiplier() -> f64 {
    WLK_CALORIES_SPEED_HEIGHT_MULTIPLIER
}

fn default_kmh_in_msec() -> f64 {
    KMH_IN_MSEC
}

fn default_cm_in_m() -> f64 {
    CM_IN_M
}

fn default_swm_speed_shift() -> f64 {
    SWM_CALORIES_MEAN_SPEED_SHIFT
}

fn default_swm_weight_multiplier() -> f64 {
    SWM_CALORIES_WEIGHT_MULTIPLIER
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            other => {
                tracing::debug!("No config file found at {:?}, using defaults", other);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    ///
    /// Coefficients that would make the formulas meaningless are rejected.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        let errors = config.coefficients().validate();
        if !errors.is_empty() {
            return Err(Error::Config(errors.join("; ")));
        }

        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    ///
    /// Returns None when the platform has no config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("stride").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Coefficients to hand to a [`crate::Dispatcher`]
    pub fn coefficients(&self) -> Coefficients {
        Coefficients {
            running: self.running,
            walking: self.walking,
            swimming: self.swimming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.running.len_step_m, 0.65);
        assert_eq!(config.walking.len_step_m, 0.65);
        assert_eq!(config.swimming.len_step_m, 1.38);
        assert_eq!(config.running.calories_mean_speed_multiplier, 18.0);
        assert_eq!(config.walking.kmh_in_msec, 0.278);
        assert_eq!(config.swimming.calories_weight_multiplier, 2.0);
        assert!(config.coefficients().validate().is_empty());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[running]
len_step_m = 0.8
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.running.len_step_m, 0.8);
        assert_eq!(config.running.calories_mean_speed_shift, 1.79); // default
        assert_eq!(config.walking, WalkingCoefficients::default());
        assert_eq!(config.swimming, SwimmingCoefficients::default());
    }

    #[test]
    fn test_save_and_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.swimming.calories_mean_speed_shift = 1.5;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.coefficients(), config.coefficients());
    }

    #[test]
    fn test_rejects_zero_step_length() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[walking]\nlen_step_m = 0.0\n").unwrap();

        match Config::load_from(&path) {
            Err(Error::Config(msg)) => assert!(msg.contains("walking.len_step_m")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_misspelled_key_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[walking]\nlen_step = 2.0\n").unwrap();

        match Config::load_from(&path) {
            Err(Error::Toml(e)) => assert!(e.to_string().contains("len_step")),
            other => panic!("Expected TOML error, got {:?}", other),
        }
    }

    #[test]
    fn test_misspelled_table_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[runing]\nlen_step_m = 1.0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[running\nlen_step_m = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
