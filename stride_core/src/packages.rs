//! Sensor packages: the built-in sample sessions and JSON batch files.

use crate::{Dispatcher, Result, WorkoutRecord};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One package as produced by the sensor unit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    pub fn read(&self, dispatcher: &Dispatcher) -> Result<WorkoutRecord> {
        dispatcher.read(&self.workout_type, &self.data)
    }
}

static SAMPLE_PACKAGES: Lazy<Vec<Package>> = Lazy::new(|| {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
});

/// The fixed sessions printed by the demonstration run
pub fn sample_packages() -> &'static [Package] {
    &SAMPLE_PACKAGES
}

/// Parse a JSON array of packages
pub fn parse_packages(json: &str) -> Result<Vec<Package>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON array of packages from a file
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let contents = std::fs::read_to_string(path)?;
    let packages = parse_packages(&contents)?;
    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, WorkoutKind};

    #[test]
    fn test_sample_packages_all_dispatch() {
        let dispatcher = Dispatcher::default();
        let kinds: Vec<WorkoutKind> = sample_packages()
            .iter()
            .map(|p| p.read(&dispatcher).unwrap().kind())
            .collect();

        assert_eq!(
            kinds,
            vec![
                WorkoutKind::Swimming,
                WorkoutKind::Running,
                WorkoutKind::SportsWalking
            ]
        );
    }

    #[test]
    fn test_parse_packages() {
        let json = r#"[
            {"workout_type": "RUN", "data": [15000, 1, 75]},
            {"workout_type": "XYZ", "data": [1, 2, 3]}
        ]"#;

        let packages = parse_packages(json).unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0], Package::new("RUN", vec![15000.0, 1.0, 75.0]));

        // A bad package only fails its own read
        let dispatcher = Dispatcher::default();
        assert!(packages[0].read(&dispatcher).is_ok());
        assert!(matches!(
            packages[1].read(&dispatcher),
            Err(Error::UnknownWorkoutType(_))
        ));
    }

    #[test]
    fn test_non_numeric_data_is_json_error() {
        let json = r#"[{"workout_type": "RUN", "data": ["fast", 1, 75]}]"#;
        assert!(matches!(parse_packages(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_packages_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("packages.json");
        let json = serde_json::to_string(sample_packages()).unwrap();
        std::fs::write(&path, json).unwrap();

        let packages = load_packages(&path).unwrap();
        assert_eq!(packages, sample_packages());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.json");
        assert!(matches!(load_packages(&path), Err(Error::Io(_))));
    }
}
