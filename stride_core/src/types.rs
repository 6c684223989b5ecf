//! Core domain types for Stride.
//!
//! This module defines the workout records built from sensor packages:
//! - Workout kinds and their short codes
//! - Per-kind records carrying raw readings and formula coefficients
//! - The closed `WorkoutRecord` union handed out by the dispatcher

use crate::config::{RunningCoefficients, SwimmingCoefficients, WalkingCoefficients};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Workout Kinds
// ============================================================================

/// Type of workout, identified on the wire by a three-letter code
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Short code used by sensor packages
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Bare name shown in workout summaries
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package of this kind carries
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| Error::UnknownWorkoutType(code.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Workout Records
// ============================================================================

/// Readings shared by every workout kind
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    /// Steps or strokes counted by the sensor
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Session {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

/// Running session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Running {
    pub session: Session,
    pub coefficients: RunningCoefficients,
}

impl Running {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Self {
        Self::with_coefficients(
            Session::new(action_count, duration_hours, weight_kg),
            RunningCoefficients::default(),
        )
    }

    pub fn with_coefficients(session: Session, coefficients: RunningCoefficients) -> Self {
        Self {
            session,
            coefficients,
        }
    }
}

/// Sports walking session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SportsWalking {
    pub session: Session,
    pub height_cm: f64,
    pub coefficients: WalkingCoefficients,
}

impl SportsWalking {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self::with_coefficients(
            Session::new(action_count, duration_hours, weight_kg),
            height_cm,
            WalkingCoefficients::default(),
        )
    }

    pub fn with_coefficients(
        session: Session,
        height_cm: f64,
        coefficients: WalkingCoefficients,
    ) -> Self {
        Self {
            session,
            height_cm,
            coefficients,
        }
    }
}

/// Swimming session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swimming {
    pub session: Session,
    pub pool_length_m: f64,
    pub pool_laps: u64,
    pub coefficients: SwimmingCoefficients,
}

impl Swimming {
    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u64,
    ) -> Self {
        Self::with_coefficients(
            Session::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_laps,
            SwimmingCoefficients::default(),
        )
    }

    pub fn with_coefficients(
        session: Session,
        pool_length_m: f64,
        pool_laps: u64,
        coefficients: SwimmingCoefficients,
    ) -> Self {
        Self {
            session,
            pool_length_m,
            pool_laps,
            coefficients,
        }
    }
}

/// A workout built from one sensor package
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WorkoutRecord {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl WorkoutRecord {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutRecord::Running(_) => WorkoutKind::Running,
            WorkoutRecord::SportsWalking(_) => WorkoutKind::SportsWalking,
            WorkoutRecord::Swimming(_) => WorkoutKind::Swimming,
        }
    }
}

impl From<Running> for WorkoutRecord {
    fn from(workout: Running) -> Self {
        WorkoutRecord::Running(workout)
    }
}

impl From<SportsWalking> for WorkoutRecord {
    fn from(workout: SportsWalking) -> Self {
        WorkoutRecord::SportsWalking(workout)
    }
}

impl From<Swimming> for WorkoutRecord {
    fn from(workout: Swimming) -> Self {
        WorkoutRecord::Swimming(workout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("RUN".parse::<WorkoutKind>().unwrap(), WorkoutKind::Running);
        assert_eq!("WLK".parse::<WorkoutKind>().unwrap(), WorkoutKind::SportsWalking);
        assert_eq!("SWM".parse::<WorkoutKind>().unwrap(), WorkoutKind::Swimming);
    }

    #[test]
    fn test_parse_is_exact() {
        for code in ["run", "XYZ", "", " RUN"] {
            match code.parse::<WorkoutKind>() {
                Err(Error::UnknownWorkoutType(c)) => assert_eq!(c, code),
                other => panic!("Expected unknown workout type, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_names_and_arity() {
        assert_eq!(WorkoutKind::SportsWalking.to_string(), "SportsWalking");
        assert_eq!(WorkoutKind::Running.arity(), 3);
        assert_eq!(WorkoutKind::SportsWalking.arity(), 4);
        assert_eq!(WorkoutKind::Swimming.arity(), 5);
    }

    #[test]
    fn test_kind_serializes_as_code() {
        let json = serde_json::to_string(&WorkoutKind::Swimming).unwrap();
        assert_eq!(json, "\"SWM\"");
    }

    #[test]
    fn test_record_kind() {
        let record: WorkoutRecord = Running::new(15000, 1.0, 75.0).into();
        assert_eq!(record.kind(), WorkoutKind::Running);
    }
}
